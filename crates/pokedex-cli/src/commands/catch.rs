use super::Session;
use crate::error::{CliError, Result};
use std::io::Write;
use tracing::debug;

/// Rolls below this catch the Pokémon
const CATCH_THRESHOLD: u32 = 50;

pub(super) async fn run(session: &mut Session, args: &[String], out: &mut dyn Write) -> Result<()> {
    let Some(name) = args.first() else {
        return Err(CliError::Usage(
            "catch command requires a Pokemon name".to_string(),
        ));
    };

    if session.pokedex.contains_key(name) {
        writeln!(out, "{} is already in your Pokedex!", name)?;
        return Ok(());
    }

    writeln!(out, "Throwing a Pokeball at {}...", name)?;
    let pokemon = session.api.pokemon(name).await?;

    let upper = pokemon.base_experience.max(CATCH_THRESHOLD);
    let roll = session.catch_roll.roll(upper);
    debug!(pokemon = %name, roll, upper, "Catch roll");

    if roll < CATCH_THRESHOLD {
        writeln!(out, "{} was caught!", name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        session.pokedex.insert(name.clone(), pokemon);
    } else {
        writeln!(out, "{} escaped!", name)?;
    }
    Ok(())
}
