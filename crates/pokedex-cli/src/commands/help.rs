use super::COMMANDS;
use crate::error::Result;
use std::io::Write;

pub(super) fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for info in COMMANDS {
        writeln!(out, "{}: {}", info.name, info.description)?;
    }
    writeln!(out)?;
    Ok(())
}
