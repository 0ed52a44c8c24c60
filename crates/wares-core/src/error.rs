//! Error types for wares-core

use thiserror::Error;

/// Result type alias using wares-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wares-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Search endpoint answered with a non-success status
    #[error("Search endpoint returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Compacted response body excerpt
        body: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
