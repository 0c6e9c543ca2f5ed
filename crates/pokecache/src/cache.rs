//! TTL cache with a background reaper task

use crate::error::{CacheError, Result};
use crate::types::{CacheEntry, CacheStats};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

/// Lower bound on the reaper period, however short the TTL
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Reaper period for a given TTL: a quarter of the TTL, at least one minute
pub fn sweep_interval(ttl: Duration) -> Duration {
    (ttl / 4).max(MIN_SWEEP_INTERVAL)
}

/// State shared between the cache handle and its reaper task
struct Shared {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl Shared {
    /// Remove every entry older than the TTL, returning how many were dropped
    async fn evict_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now, self.ttl));
        let removed = before - entries.len();
        self.evictions.fetch_add(removed as u64, Ordering::Relaxed);
        removed
    }
}

/// In-memory cache of response bodies keyed by request URL.
///
/// Entries expire by age only. A single reaper task, spawned on the current
/// tokio runtime by [`TtlCache::new`], sweeps expired entries every
/// [`sweep_interval`]; reads never check expiry, so an entry can outlive its
/// TTL by up to one sweep period.
///
/// The reaper stops when [`TtlCache::close`] is called or the cache is
/// dropped. A closed cache still serves `get`/`add`, it just no longer
/// evicts.
pub struct TtlCache {
    shared: Arc<Shared>,
    shutdown: watch::Sender<bool>,
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl TtlCache {
    /// Create an empty cache and start its reaper.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let shared = Arc::new(Shared {
            entries: RwLock::new(HashMap::new()),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        });

        let period = sweep_interval(ttl);
        let (shutdown, shutdown_rx) = watch::channel(false);
        let reaper = tokio::spawn(reap_loop(Arc::clone(&shared), period, shutdown_rx));

        debug!(
            ttl_secs = ttl.as_secs(),
            sweep_secs = period.as_secs(),
            "TTL cache created"
        );

        Self {
            shared,
            shutdown,
            reaper: Mutex::new(Some(reaper)),
        }
    }

    /// Maximum age of an entry before the reaper may remove it
    pub fn ttl(&self) -> Duration {
        self.shared.ttl
    }

    /// Look up a cached body. Does not extend the entry's lifetime.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        if key.is_empty() {
            return None;
        }

        let value = {
            let entries = self.shared.entries.read().await;
            entries.get(key).map(|entry| entry.value.clone())
        };

        if value.is_some() {
            self.shared.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key, "Cache hit");
        } else {
            self.shared.misses.fetch_add(1, Ordering::Relaxed);
            debug!(key, "Cache miss");
        }

        value
    }

    /// Store a body under `key`, replacing any previous entry and resetting its age.
    ///
    /// `None` is not a storable value, since it would read back the same as a
    /// miss. Empty bodies are stored like any other. An empty key is rejected.
    pub async fn add(&self, key: &str, value: impl Into<Option<Vec<u8>>>) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidArgument(
                "key must not be empty".to_string(),
            ));
        }
        let Some(value) = value.into() else {
            return Err(CacheError::InvalidArgument(
                "value must be present".to_string(),
            ));
        };

        let size = value.len();
        {
            let mut entries = self.shared.entries.write().await;
            entries.insert(key.to_string(), CacheEntry::new(value));
        }

        debug!(key, size, "Cached response");
        Ok(())
    }

    /// Number of entries currently held, expired-but-unswept ones included
    pub async fn len(&self) -> usize {
        self.shared.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Get current cache statistics
    pub async fn stats(&self) -> CacheStats {
        let entries = self.shared.entries.read().await;
        CacheStats {
            entries: entries.len(),
            hits: self.shared.hits.load(Ordering::Relaxed),
            misses: self.shared.misses.load(Ordering::Relaxed),
            evictions: self.shared.evictions.load(Ordering::Relaxed),
        }
    }

    /// Whether [`TtlCache::close`] has been called
    pub fn is_closed(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Stop the reaper and wait for it to finish. Calling it again is a no-op.
    pub async fn close(&self) {
        self.shutdown.send_replace(true);

        let handle = self.reaper.lock().ok().and_then(|mut slot| slot.take());
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!(error = %e, "TTL cache reaper ended abnormally");
            }
        }
    }
}

// Dropping the cache drops `shutdown`, which the reaper observes as a closed
// channel and exits on.

async fn reap_loop(shared: Arc<Shared>, period: Duration, mut shutdown: watch::Receiver<bool>) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let removed = shared.evict_expired().await;
                if removed > 0 {
                    debug!(removed, "Evicted expired cache entries");
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    debug!("TTL cache reaper stopped");
}
