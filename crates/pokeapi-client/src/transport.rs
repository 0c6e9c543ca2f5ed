//! reqwest transport shared by the JSON cache and the sprite cache

use crate::error::{PokeApiError, Result};
use async_trait::async_trait;
use pokecache::{FetchedBody, Fetcher};
use sprite_cache::Downloader;
use std::time::Duration;
use tracing::{debug, warn};

/// Timeout applied to every request unless configured otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("pokedex-cli/", env!("CARGO_PKG_VERSION"));

/// Plain HTTP GET client with a bounded per-request timeout
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default 10 second timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http })
    }

    /// GET `url`, returning the status code and full body
    pub async fn get(&self, url: &str) -> Result<(u16, Vec<u8>)> {
        debug!(url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(url, status, size = body.len(), "Response received");
        Ok((status, body))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<FetchedBody, pokecache::BoxError> {
        let (status, body) = self.get(url).await?;
        Ok(FetchedBody { status, body })
    }
}

#[async_trait]
impl Downloader for HttpFetcher {
    async fn download(&self, url: &str) -> std::result::Result<Vec<u8>, sprite_cache::BoxError> {
        let (status, body) = self.get(url).await?;

        if !(200..300).contains(&status) {
            warn!(url, status, "Failed to download sprite");
            return Err(Box::new(PokeApiError::Status {
                url: url.to_string(),
                status,
            }));
        }

        Ok(body)
    }
}
