//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch, etc.).

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::SearchIndexError;
use event_indexer_shared::EventDocument;

/// Abstracts a connected search index backend (OpenSearch, Elasticsearch, etc.).
///
/// A provider is obtained from a [`SearchIndexConnector`](crate::SearchIndexConnector)
/// and is addressed by index name on every call, since one backend can serve
/// many projects.
///
/// All methods return `Result<T, SearchIndexError>` with one error variant per
/// operation, so the caller can tell which step failed.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Check whether an index exists.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the index exists
    /// * `Ok(false)` - If the backend reports it missing
    /// * `Err(SearchIndexError::IndexLookupError)` - If the check itself fails
    async fn index_exists(&self, index: &str) -> Result<bool, SearchIndexError>;

    /// Create an index.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index was created (or already existed)
    /// * `Err(SearchIndexError::IndexCreationError)` - If creation fails
    async fn create_index(&self, index: &str) -> Result<(), SearchIndexError>;

    /// Submit a document to an index.
    ///
    /// # Arguments
    ///
    /// * `index` - The target index name
    /// * `document` - The event document to index
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the document was accepted
    /// * `Err(SearchIndexError::IndexError)` - If indexing fails
    async fn submit_document(
        &self,
        index: &str,
        document: &EventDocument,
    ) -> Result<(), SearchIndexError>;

    /// Ensure the index exists, creating it if the backend reports it missing.
    ///
    /// `create_index` is called at most once per invocation, and only after
    /// `index_exists` returned `Ok(false)`.
    async fn ensure_index_exists(&self, index: &str) -> Result<(), SearchIndexError> {
        if self.index_exists(index).await? {
            debug!(index = %index, "Index already exists");
            return Ok(());
        }

        info!(index = %index, "Creating index");
        self.create_index(index).await
    }
}
