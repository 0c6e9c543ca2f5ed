//! Rust client for the [PokeAPI](https://pokeapi.co/) REST service
//!
//! [`HttpFetcher`] is the reqwest transport; it plugs into both
//! [`pokecache::Fetcher`] for JSON lookups and [`sprite_cache::Downloader`]
//! for sprite images. [`PokeApi`] offers typed calls that go through the
//! in-memory TTL cache.
//!
//! # Example
//!
//! ```no_run
//! use pokeapi_client::{HttpFetcher, PokeApi};
//! use pokecache::TtlCache;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() -> pokeapi_client::Result<()> {
//! let fetcher = Arc::new(HttpFetcher::new()?);
//! let cache = Arc::new(TtlCache::new(Duration::from_secs(300)));
//! let api = PokeApi::new(cache, fetcher);
//!
//! let page = api.location_areas(None).await?;
//! for area in &page.results {
//!     println!("{}", area.name);
//! }
//!
//! let pikachu = api.pokemon("pikachu").await?;
//! println!("{} weighs {} hg", pikachu.name, pikachu.weight);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /location-area/` - Paginated list of location areas
//! - `GET /location-area/{name}` - Pokémon encounters in an area
//! - `GET /pokemon/{name}` - Pokémon details, stats and sprites

mod api;
mod error;
mod transport;
mod types;

pub use api::{PokeApi, DEFAULT_BASE_URL};
pub use error::{PokeApiError, Result};
pub use transport::{HttpFetcher, DEFAULT_TIMEOUT};
pub use types::{AreaPage, LocationArea, NamedResource, Pokemon, PokemonEncounter, Stat};
