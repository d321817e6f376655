//! Search index connector trait definition.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;

/// Opens connections to a search index backend.
///
/// The adapter holds a connector from construction and only calls `connect`
/// once a project is configured, so the endpoint is not known up front.
#[async_trait]
pub trait SearchIndexConnector: Send + Sync {
    /// Connect to the backend at `endpoint`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The configured connection string (e.g. `127.0.0.1:9500`)
    ///
    /// # Returns
    ///
    /// * `Ok(provider)` - A handle for index and document operations
    /// * `Err(SearchIndexError)` - If the endpoint is invalid or the connection fails
    async fn connect(
        &self,
        endpoint: &str,
    ) -> Result<Arc<dyn SearchIndexProvider>, SearchIndexError>;
}
