//! Pokedex - interactive PokeAPI browser for the terminal
//!
//! Responses are held in an in-memory TTL cache for the session and
//! sprites are kept on disk so repeat inspections work offline.

mod commands;
mod config;
mod error;
mod render;
mod repl;

use crate::commands::{ProcessExiter, RandomRoll, Session};
use crate::config::Config;
use crate::error::Result;
use pokeapi_client::{HttpFetcher, PokeApi};
use pokecache::TtlCache;
use sprite_cache::SpriteStore;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with REPL output
    let env_filter = EnvFilter::from_default_env()
        .add_directive("pokedex=warn".parse()?)
        .add_directive("sprite_cache=warn".parse()?);

    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    };

    let config = Config::from_env();
    info!(
        base_url = %config.api_base_url,
        cache_ttl_secs = config.cache_ttl.as_secs(),
        http_timeout_secs = config.http_timeout.as_secs(),
        "Starting Pokedex"
    );

    let http = Arc::new(HttpFetcher::with_timeout(config.http_timeout)?);
    let cache = Arc::new(TtlCache::new(config.cache_ttl));
    let api = PokeApi::with_base_url(&config.api_base_url, cache.clone(), http.clone());

    let sprites = match config.sprite_dir {
        Some(dir) => SpriteStore::new(Some(dir), http),
        None => SpriteStore::in_home_dir(http),
    };
    if let Err(e) = sprites.init().await {
        warn!(error = %e, "Sprite directory unavailable, sprites will be downloaded each time");
    }

    let mut session = Session::new(
        api,
        sprites,
        Box::new(ProcessExiter),
        Box::new(RandomRoll::from_entropy()),
    );

    let stdin = BufReader::new(tokio::io::stdin());
    repl::run(&mut session, stdin, &mut std::io::stdout()).await?;

    let stats = cache.stats().await;
    let sprite_stats = session.sprites.stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        evictions = stats.evictions,
        sprite_hits = sprite_stats.hits,
        sprite_misses = sprite_stats.misses,
        "Pokedex closed"
    );

    Ok(())
}
