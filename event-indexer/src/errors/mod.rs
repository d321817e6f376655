//! Error types for the event indexer.

use event_indexer_repository::SearchIndexError;
use thiserror::Error;

/// Errors that can occur while indexing an event.
///
/// None of these reach the host: the adapter logs them and moves on.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration or initialization error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The event's extra data could not be read as a key/value payload.
    #[error("Payload error: {0}")]
    PayloadError(String),

    /// Error from the search index client.
    #[error("Search index error: {0}")]
    SearchError(#[from] SearchIndexError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a payload error.
    pub fn payload(msg: impl Into<String>) -> Self {
        Self::PayloadError(msg.into())
    }
}
