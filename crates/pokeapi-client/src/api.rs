//! Typed PokeAPI calls served through the TTL cache

use crate::error::{PokeApiError, Result};
use crate::types::{AreaPage, LocationArea, Pokemon, PokemonResponse};
use pokecache::{fetch_json, Fetcher, TtlCache};
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// PokeAPI client whose responses are memoized in a [`TtlCache`]
#[derive(Clone)]
pub struct PokeApi {
    base_url: String,
    cache: Arc<TtlCache>,
    fetcher: Arc<dyn Fetcher>,
}

impl PokeApi {
    pub fn new(cache: Arc<TtlCache>, fetcher: Arc<dyn Fetcher>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, cache, fetcher)
    }

    /// Create a client against a custom PokeAPI deployment
    pub fn with_base_url(base_url: &str, cache: Arc<TtlCache>, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
            fetcher,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }

    /// URL of the first page of location areas
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// Fetch a page of location areas; `None` fetches the first page.
    ///
    /// Page URLs are the `next`/`previous` links of an earlier [`AreaPage`].
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<AreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.location_areas_url(),
        };
        debug!(url = %url, "Fetching location areas");
        Ok(fetch_json(&url, &self.cache, self.fetcher.as_ref()).await?)
    }

    /// Fetch a single location area by name or id
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = self.resource_url("location-area", name)?;
        Ok(fetch_json(&url, &self.cache, self.fetcher.as_ref()).await?)
    }

    /// Fetch a Pokémon by name or id
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = self.resource_url("pokemon", name)?;
        let raw: PokemonResponse = fetch_json(&url, &self.cache, self.fetcher.as_ref()).await?;
        Ok(Pokemon::from(raw))
    }

    fn resource_url(&self, resource: &str, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PokeApiError::InvalidArgument(format!(
                "{} name must not be empty",
                resource
            )));
        }
        Ok(format!(
            "{}/{}/{}",
            self.base_url,
            resource,
            urlencoding::encode(&name.to_lowercase())
        ))
    }
}
