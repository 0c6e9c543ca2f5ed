//! Error types for the PokeAPI client

use std::fmt;

/// Errors that can occur when talking to PokeAPI
#[derive(Debug)]
pub enum PokeApiError {
    /// HTTP request failed
    Http(Box<reqwest::Error>),
    /// PokeAPI answered with a non-success status
    Status { url: String, status: u16 },
    /// Cached lookup failed (remote error, decode error, bad key)
    Cache(pokecache::CacheError),
    InvalidArgument(String),
}

impl fmt::Display for PokeApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "PokeAPI HTTP error: {}", e),
            Self::Status { url, status } => {
                write!(f, "PokeAPI returned status {} for {}", status, url)
            }
            Self::Cache(e) => write!(f, "{}", e),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for PokeApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e.as_ref()),
            Self::Cache(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PokeApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(Box::new(e))
    }
}

impl From<pokecache::CacheError> for PokeApiError {
    fn from(e: pokecache::CacheError) -> Self {
        Self::Cache(e)
    }
}

/// Result type for PokeAPI operations
pub type Result<T> = std::result::Result<T, PokeApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = PokeApiError::Status {
            url: "https://pokeapi.co/api/v2/pokemon/missingno".to_string(),
            status: 404,
        };
        assert_eq!(
            format!("{}", err),
            "PokeAPI returned status 404 for https://pokeapi.co/api/v2/pokemon/missingno"
        );
    }

    #[test]
    fn test_cache_error_is_transparent() {
        let err = PokeApiError::from(pokecache::CacheError::InvalidArgument(
            "url must not be empty".to_string(),
        ));
        assert_eq!(format!("{}", err), "Invalid argument: url must not be empty");
        assert!(std::error::Error::source(&err).is_some());
    }
}
