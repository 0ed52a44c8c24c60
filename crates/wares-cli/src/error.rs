use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] wares_core::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Search query cannot be empty")]
    EmptySearchQuery,
    #[error("Configuration error: {0}")]
    Config(String),
}
