use pokeapi_client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_CACHE_TTL_SECS: u64 = 5 * 60;

/// CLI configuration parsed from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub cache_ttl: Duration,
    pub http_timeout: Duration,
    /// Overrides `~/.pokedex_sprites` when set
    pub sprite_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            http_timeout: DEFAULT_TIMEOUT,
            sprite_dir: None,
        }
    }
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = lookup("POKEAPI_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.api_base_url);

        let cache_ttl = lookup("POKEDEX_CACHE_TTL_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.cache_ttl);

        let http_timeout = lookup("POKEDEX_HTTP_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.http_timeout);

        let sprite_dir = lookup("POKEDEX_SPRITE_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Self {
            api_base_url,
            cache_ttl,
            http_timeout,
            sprite_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert!(config.sprite_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("POKEAPI_BASE_URL", "http://localhost:8000/api/v2"),
            ("POKEDEX_CACHE_TTL_SECS", "60"),
            ("POKEDEX_HTTP_TIMEOUT_SECS", "3"),
            ("POKEDEX_SPRITE_DIR", "/tmp/sprites"),
        ]);
        assert_eq!(config.api_base_url, "http://localhost:8000/api/v2");
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.sprite_dir, Some(PathBuf::from("/tmp/sprites")));
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("POKEDEX_CACHE_TTL_SECS", "five minutes"),
            ("POKEDEX_HTTP_TIMEOUT_SECS", "0"),
            ("POKEDEX_SPRITE_DIR", ""),
        ]);
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert!(config.sprite_dir.is_none());
    }
}
