//! Content-addressed sprite cache
//!
//! Stores downloaded sprite images on disk under a filename derived from the
//! SHA-256 of their source URL, so repeated lookups of the same sprite never
//! hit the network again. Entries never expire; persistence is best-effort
//! and a missing or unwritable cache directory only disables it.

mod error;
mod store;

pub use error::{BoxError, Result, SpriteCacheError};
pub use store::{Downloader, SpriteStats, SpriteStore, DEFAULT_DIR_NAME};
