//! Read-through fetch over the TTL cache

use crate::cache::TtlCache;
use crate::error::{BoxError, CacheError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Raw response handed back by a [`Fetcher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedBody {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchedBody {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Retrieves the raw bytes behind a cache key.
///
/// Implementations are expected to bound each call with their own timeout.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> std::result::Result<FetchedBody, BoxError>;
}

/// Return the body for `url` from the cache, or fetch and cache it.
///
/// Non-success responses are reported as [`CacheError::Remote`] and never
/// cached. If the fetched body cannot be cached the whole call fails.
/// An empty body is a valid response and is cached like any other.
pub async fn fetch_bytes<F>(url: &str, cache: &TtlCache, fetcher: &F) -> Result<Vec<u8>>
where
    F: Fetcher + ?Sized,
{
    if url.is_empty() {
        return Err(CacheError::InvalidArgument(
            "url must not be empty".to_string(),
        ));
    }

    if let Some(cached) = cache.get(url).await {
        return Ok(cached);
    }

    debug!(url, "Fetching from remote");
    let response = fetcher.fetch(url).await.map_err(CacheError::Fetch)?;

    if !response.is_success() {
        return Err(CacheError::Remote {
            url: url.to_string(),
            status: response.status,
        });
    }

    cache.add(url, response.body.clone()).await?;
    Ok(response.body)
}

/// Like [`fetch_bytes`], then decode the JSON body into `T`.
///
/// Corrupt bytes, whether cached or freshly fetched, surface as
/// [`CacheError::Decode`].
pub async fn fetch_json<T, F>(url: &str, cache: &TtlCache, fetcher: &F) -> Result<T>
where
    T: DeserializeOwned,
    F: Fetcher + ?Sized,
{
    let body = fetch_bytes(url, cache, fetcher).await?;
    Ok(serde_json::from_slice(&body)?)
}
