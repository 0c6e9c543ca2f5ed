//! Error types for the TTL cache and fetch wrapper

use std::fmt;

/// Boxed error returned by fetch collaborators
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug)]
pub enum CacheError {
    /// Empty key or absent value
    InvalidArgument(String),
    /// Cached or fetched bytes did not decode into the requested type
    Decode(serde_json::Error),
    /// The fetcher reached the remote but got a non-success status
    Remote { url: String, status: u16 },
    /// The fetcher itself failed (transport, timeout, body read)
    Fetch(BoxError),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::Decode(e) => write!(f, "Failed to decode response: {}", e),
            Self::Remote { url, status } => {
                write!(f, "Received non-success response {} from {}", status, url)
            }
            Self::Fetch(e) => write!(f, "Failed to make request: {}", e),
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Fetch(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

pub type Result<T> = std::result::Result<T, CacheError>;
