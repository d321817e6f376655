//! OpenSearch provider implementation.
//!
//! This module provides the concrete implementation of `SearchIndexConnector`
//! and `SearchIndexProvider` using the OpenSearch Rust crate.

use std::sync::Arc;

use async_trait::async_trait;
use opensearch::{
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts},
    IndexParts, OpenSearch,
};
use tracing::{debug, error, info};

use crate::errors::SearchIndexError;
use crate::interfaces::{SearchIndexConnector, SearchIndexProvider};
use crate::opensearch::index_config::get_index_settings;
use crate::utils;
use event_indexer_shared::EventDocument;

/// Error type OpenSearch reports when creating an index that is already there.
const ALREADY_EXISTS_ERROR: &str = "resource_already_exists_exception";

/// Connector producing [`OpenSearchProvider`] handles.
///
/// # Example
///
/// ```ignore
/// use event_indexer_repository::{OpenSearchConnector, SearchIndexConnector};
///
/// let provider = OpenSearchConnector::new().connect("127.0.0.1:9500").await?;
/// provider.ensure_index_exists("sentry-backend").await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpenSearchConnector;

impl OpenSearchConnector {
    /// Create a new connector.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SearchIndexConnector for OpenSearchConnector {
    async fn connect(
        &self,
        endpoint: &str,
    ) -> Result<Arc<dyn SearchIndexProvider>, SearchIndexError> {
        let provider = OpenSearchProvider::new(endpoint).await?;
        Ok(Arc::new(provider))
    }
}

/// OpenSearch provider implementation.
///
/// Works against OpenSearch and Elasticsearch-compatible clusters. Index names
/// are supplied per call.
pub struct OpenSearchProvider {
    client: OpenSearch,
}

impl OpenSearchProvider {
    /// Create a new OpenSearch provider connected to the specified endpoint.
    ///
    /// # Arguments
    ///
    /// * `connection_string` - `host:port` or a full URL (e.g., "http://localhost:9200")
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If the connection string is invalid or transport setup fails
    pub async fn new(connection_string: &str) -> Result<Self, SearchIndexError> {
        let parsed_url = utils::parse_connection_string(connection_string)?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url.clone());
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(url = %parsed_url, "Created OpenSearch provider");

        Ok(Self { client })
    }

    /// Document ID for an event document.
    ///
    /// The event id is used so that a re-delivered event overwrites its
    /// earlier document instead of duplicating it.
    fn document_id(document: &EventDocument) -> Option<String> {
        document.id().map(|id| id.to_string())
    }

    /// Whether a failed create-index response means the index is already there.
    fn is_already_exists(body: &str) -> bool {
        body.contains(ALREADY_EXISTS_ERROR)
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchProvider {
    async fn index_exists(&self, index: &str) -> Result<bool, SearchIndexError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| SearchIndexError::index_lookup(e.to_string()))?;

        let status = response.status_code();
        if status.is_success() {
            return Ok(true);
        }
        if status.as_u16() == 404 {
            return Ok(false);
        }

        error!(index = %index, status = %status, "Index existence check failed");
        Err(SearchIndexError::index_lookup(format!(
            "Existence check for '{}' failed with status {}",
            index, status
        )))
    }

    async fn create_index(&self, index: &str) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(get_index_settings())
            .send()
            .await
            .map_err(|e| SearchIndexError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();

            // Another writer created it between our check and create
            if Self::is_already_exists(&error_body) {
                debug!(index = %index, "Index created concurrently");
                return Ok(());
            }

            error!(status = %status, body = %error_body, "Create index request failed");
            return Err(SearchIndexError::index_creation(format!(
                "Create index '{}' failed with status {}: {}",
                index, status, error_body
            )));
        }

        info!(index = %index, "Index created");
        Ok(())
    }

    async fn submit_document(
        &self,
        index: &str,
        document: &EventDocument,
    ) -> Result<(), SearchIndexError> {
        let doc_id = Self::document_id(document);
        let parts = match doc_id.as_deref() {
            Some(doc_id) => IndexParts::IndexId(index, doc_id),
            None => IndexParts::Index(index),
        };

        let response = self
            .client
            .index(parts)
            .body(document)
            .send()
            .await
            .map_err(|e| SearchIndexError::index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index request failed");
            return Err(SearchIndexError::index(format!(
                "Index failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(index = %index, event_id = ?document.id(), "Document indexed");
        Ok(())
    }
}
