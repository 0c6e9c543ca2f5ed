use super::Session;
use crate::error::Result;
use std::io::Write;
use tracing::info;

pub(super) async fn run(session: &mut Session, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Closing the Pokedex... Goodbye!")?;
    out.flush()?;

    let cache = session.api.cache();
    let stats = cache.stats().await;
    cache.close().await;
    info!(
        entries = stats.entries,
        hits = stats.hits,
        misses = stats.misses,
        caught = session.pokedex.len(),
        "Session ended"
    );

    session.exiter.exit(0);
    Ok(())
}
