use super::Session;
use crate::error::Result;
use std::io::Write;

pub(super) fn run(session: &Session, out: &mut dyn Write) -> Result<()> {
    if session.pokedex.is_empty() {
        writeln!(out, "Your Pokedex is empty.")?;
        return Ok(());
    }
    writeln!(out, "Your Pokedex:")?;
    for name in session.pokedex.keys() {
        writeln!(out, "  - {}", name)?;
    }
    Ok(())
}
