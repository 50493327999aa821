//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; these cover the fetch, decode and command layers around it.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for everything outside the cache.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Request could not be sent or the body could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Payload was not the JSON shape we expected
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Command was invoked with missing arguments
    #[error("{0}")]
    Usage(String),

    /// First word of the input is not a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl PokedexError {
    /// Builds a usage error with the given hint.
    pub fn usage(hint: impl Into<String>) -> Self {
        PokedexError::Usage(hint.into())
    }

    /// Returns true for a 404 from the API, i.e. an unknown area or pokemon name.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::Status { status: 404, .. })
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
