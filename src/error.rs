use thiserror::Error;

/// Errors that can occur while looking up or storing recipes
#[derive(Error, Debug)]
pub enum FinderError {
    /// The model provider returned an error or an unusable payload
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// The query was empty after trimming
    #[error("Query cannot be empty")]
    EmptyQuery,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Favorites store failed to read or write
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
