//! Error types for the sprite cache

use std::fmt;

/// Boxed error returned by download collaborators
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug)]
pub enum SpriteCacheError {
    InvalidArgument(String),
    Download(BoxError),
    Io(Box<std::io::Error>),
}

impl fmt::Display for SpriteCacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteCacheError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            SpriteCacheError::Download(err) => write!(f, "Failed to download sprite: {}", err),
            SpriteCacheError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for SpriteCacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpriteCacheError::Download(err) => Some(err.as_ref()),
            SpriteCacheError::Io(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SpriteCacheError {
    fn from(err: std::io::Error) -> Self {
        SpriteCacheError::Io(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, SpriteCacheError>;
