//! In-memory TTL cache for PokeAPI responses
//!
//! [`TtlCache`] keeps raw response bodies keyed by request URL and evicts
//! them by age from a single background task. [`fetch_json`] layers the
//! read-through pattern on top: serve from the cache when possible, otherwise
//! call a [`Fetcher`], store the raw bytes and decode them into the caller's
//! type.
//!
//! # Example
//!
//! ```no_run
//! use pokecache::{fetch_json, TtlCache};
//! # use pokecache::{Fetcher, FetchedBody, BoxError};
//! # struct Http;
//! # #[async_trait::async_trait]
//! # impl Fetcher for Http {
//! #     async fn fetch(&self, _url: &str) -> Result<FetchedBody, BoxError> { unimplemented!() }
//! # }
//! use std::time::Duration;
//!
//! # async fn example() -> pokecache::Result<()> {
//! let cache = TtlCache::new(Duration::from_secs(300));
//! let _page: serde_json::Value =
//!     fetch_json("https://pokeapi.co/api/v2/location-area/", &cache, &Http).await?;
//! cache.close().await;
//! # Ok(())
//! # }
//! ```

mod cache;
mod error;
mod fetch;
mod types;

pub use cache::{sweep_interval, TtlCache, MIN_SWEEP_INTERVAL};
pub use error::{BoxError, CacheError, Result};
pub use fetch::{fetch_bytes, fetch_json, FetchedBody, Fetcher};
pub use types::CacheStats;
