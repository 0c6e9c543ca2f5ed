//! Error types for the Pokedex CLI

use std::fmt;

#[derive(Debug)]
pub enum CliError {
    Api(pokeapi_client::PokeApiError),
    /// A command was invoked without the arguments it needs
    Usage(String),
    Io(Box<std::io::Error>),
    Config(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Api(err) => write!(f, "{}", err),
            CliError::Usage(msg) => write!(f, "{}", msg),
            CliError::Io(err) => write!(f, "IO error: {}", err),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Api(err) => Some(err),
            CliError::Io(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<pokeapi_client::PokeApiError> for CliError {
    fn from(err: pokeapi_client::PokeApiError) -> Self {
        CliError::Api(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(Box::new(err))
    }
}

impl From<tracing_subscriber::filter::ParseError> for CliError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        CliError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
