//! Search index error types.
//!
//! One variant per remote operation, so callers can match on exactly which
//! step of connect / check / create / submit went wrong.

use thiserror::Error;

/// Errors from search index operations.
///
/// Returned by `SearchIndexConnector` and `SearchIndexProvider`. Callers in
/// the adapter match on these, log them, and carry on.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// Validation error (e.g., malformed connection string, empty index name).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Failed to establish connection to the search index backend.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Failed to check whether the index exists.
    #[error("Index lookup error: {0}")]
    IndexLookupError(String),

    /// Failed to create the search index.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// Failed to index a document.
    #[error("Index error: {0}")]
    IndexError(String),
}

impl SearchIndexError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an index lookup error.
    pub fn index_lookup(msg: impl Into<String>) -> Self {
        Self::IndexLookupError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Short, stable name of the failing step, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "validation",
            Self::ConnectionError(_) => "connection",
            Self::IndexLookupError(_) => "index_lookup",
            Self::IndexCreationError(_) => "index_creation",
            Self::IndexError(_) => "index",
        }
    }
}
