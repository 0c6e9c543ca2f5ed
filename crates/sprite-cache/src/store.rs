//! File-based sprite storage addressed by URL hash

use crate::error::{BoxError, Result, SpriteCacheError};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};

/// Directory created under the user's home for cached sprites
pub const DEFAULT_DIR_NAME: &str = ".pokedex_sprites";

const FILE_EXTENSION: &str = "png";

/// Downloads sprite bytes on a cache miss.
///
/// Implementations should fail on non-success responses and bound each call
/// with their own timeout.
#[async_trait]
pub trait Downloader: Send + Sync {
    async fn download(&self, url: &str) -> std::result::Result<Vec<u8>, BoxError>;
}

/// Counters for sprite lookups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpriteStats {
    pub hits: u64,
    pub misses: u64,
    pub write_failures: u64,
}

/// Read-through, write-through sprite cache on the local filesystem
pub struct SpriteStore {
    /// Directory holding cached sprites; `None` disables persistence
    cache_dir: Option<PathBuf>,
    downloader: Arc<dyn Downloader>,
    hits: AtomicU64,
    misses: AtomicU64,
    write_failures: AtomicU64,
    /// Distinguishes temp files of concurrent writes
    temp_seq: AtomicU64,
}

impl SpriteStore {
    /// Create a store rooted at `cache_dir`, or a pass-through store when `None`
    pub fn new(cache_dir: Option<PathBuf>, downloader: Arc<dyn Downloader>) -> Self {
        Self {
            cache_dir,
            downloader,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            temp_seq: AtomicU64::new(0),
        }
    }

    /// Create a store under `~/.pokedex_sprites`
    pub fn in_home_dir(downloader: Arc<dyn Downloader>) -> Self {
        let cache_dir = dirs::home_dir().map(|home| home.join(DEFAULT_DIR_NAME));
        if cache_dir.is_none() {
            warn!("No home directory found, sprites will not be cached");
        }
        Self::new(cache_dir, downloader)
    }

    pub fn cache_dir(&self) -> Option<&Path> {
        self.cache_dir.as_deref()
    }

    /// Hex-encoded SHA-256 of the sprite URL
    pub fn cache_key(url: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// File a sprite URL maps to, if persistence is enabled
    pub fn path_for(&self, url: &str) -> Option<PathBuf> {
        self.cache_dir.as_ref().map(|dir| {
            dir.join(format!("{}.{}", Self::cache_key(url), FILE_EXTENSION))
        })
    }

    /// Ensure the cache directory exists
    pub async fn init(&self) -> Result<()> {
        if let Some(dir) = &self.cache_dir {
            fs::create_dir_all(dir).await?;
            info!(cache_dir = ?dir, "Sprite cache initialized");
        }
        Ok(())
    }

    /// Return the sprite at `url`, from disk if cached, otherwise downloaded.
    ///
    /// Only download failures are errors. A cache directory that cannot be
    /// created or a file that cannot be written is logged and skipped.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if url.is_empty() {
            return Err(SpriteCacheError::InvalidArgument(
                "empty sprite URL".to_string(),
            ));
        }

        let path = self.prepare_path(url).await;

        if let Some(path) = &path {
            match fs::read(path).await {
                Ok(data) if !data.is_empty() => {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    debug!(url, path = ?path, "Sprite cache hit");
                    return Ok(data);
                }
                Ok(_) => debug!(url, path = ?path, "Ignoring empty cached sprite"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => warn!(url, path = ?path, error = %e, "Failed to read cached sprite"),
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let data = self
            .downloader
            .download(url)
            .await
            .map_err(SpriteCacheError::Download)?;

        if let Some(path) = &path {
            match self.persist(path, &data).await {
                Ok(()) => debug!(url, path = ?path, size = data.len(), "Cached sprite"),
                Err(e) => {
                    self.write_failures.fetch_add(1, Ordering::Relaxed);
                    warn!(url, path = ?path, error = %e, "Failed to cache sprite");
                }
            }
        }

        Ok(data)
    }

    pub fn stats(&self) -> SpriteStats {
        SpriteStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            write_failures: self.write_failures.load(Ordering::Relaxed),
        }
    }

    /// Write `data` to a sibling temp file, then rename it over `path`.
    ///
    /// Readers see either no file or the complete sprite, never a partial write.
    async fn persist(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        let seq = self.temp_seq.fetch_add(1, Ordering::Relaxed);
        let temp = path.with_extension(format!(
            "{}.{}-{}.tmp",
            FILE_EXTENSION,
            std::process::id(),
            seq
        ));

        let written = match fs::write(&temp, data).await {
            Ok(()) => fs::rename(&temp, path).await,
            Err(e) => Err(e),
        };
        if written.is_err() {
            let _ = fs::remove_file(&temp).await;
        }
        written
    }

    /// Resolve the file for `url`, creating the cache directory if needed
    async fn prepare_path(&self, url: &str) -> Option<PathBuf> {
        let dir = self.cache_dir.as_ref()?;
        if let Err(e) = fs::create_dir_all(dir).await {
            warn!(cache_dir = ?dir, error = %e, "Cannot create sprite cache directory, not caching");
            return None;
        }
        self.path_for(url)
    }
}
