use super::Session;
use crate::error::{CliError, Result};
use std::io::Write;

pub(super) async fn run(session: &mut Session, args: &[String], out: &mut dyn Write) -> Result<()> {
    let Some(name) = args.first() else {
        return Err(CliError::Usage(
            "explore command requires a location area name".to_string(),
        ));
    };

    let area = session.api.location_area(name).await?;

    writeln!(out, "Exploring {}...", name)?;
    writeln!(out, "Found Pokemon:")?;
    if area.pokemon_encounters.is_empty() {
        writeln!(out, "No Pokemon found in this area.")?;
        return Ok(());
    }
    for encounter in &area.pokemon_encounters {
        writeln!(out, " - {}", encounter.pokemon.name)?;
    }
    Ok(())
}
