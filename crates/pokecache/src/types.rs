//! Cache types

use tokio::time::Instant;

/// A cached response body and the moment it was stored
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    pub(crate) created_at: Instant,
    pub(crate) value: Vec<u8>,
}

impl CacheEntry {
    pub(crate) fn new(value: Vec<u8>) -> Self {
        Self {
            created_at: Instant::now(),
            value,
        }
    }

    /// Whether the entry is older than `ttl` as of `now`
    pub(crate) fn is_expired(&self, now: Instant, ttl: std::time::Duration) -> bool {
        now.saturating_duration_since(self.created_at) > ttl
    }
}

/// Statistics about the cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}
