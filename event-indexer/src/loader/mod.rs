//! Loader module for the event indexer.
//!
//! Owns the connection to the search index and submits documents through it.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, info, instrument};

use event_indexer_repository::{SearchIndexConnector, SearchIndexError, SearchIndexProvider};
use event_indexer_shared::EventDocument;

/// Loader that indexes documents into the search engine.
///
/// The loader is responsible for:
/// - Establishing the connection on first use
/// - Making sure the target index exists before the first submission
/// - Submitting documents once connected
///
/// The connection is stored only after both connecting and ensuring the index
/// succeeded. Concurrent callers of [`connect`](Self::connect) wait on the same
/// attempt, and a failed attempt leaves the loader disconnected so the next
/// call tries again.
pub struct SearchLoader {
    connector: Arc<dyn SearchIndexConnector>,
    connection: OnceCell<Arc<dyn SearchIndexProvider>>,
}

impl SearchLoader {
    /// Create a new, disconnected loader.
    pub fn new(connector: Arc<dyn SearchIndexConnector>) -> Self {
        Self {
            connector,
            connection: OnceCell::new(),
        }
    }

    /// Whether a connection has been established.
    pub fn is_connected(&self) -> bool {
        self.connection.initialized()
    }

    /// Connect to `endpoint` and ensure `index` exists, unless already connected.
    #[instrument(skip(self))]
    pub async fn connect(&self, endpoint: &str, index: &str) -> Result<(), SearchIndexError> {
        self.connection
            .get_or_try_init(|| async move {
                debug!("Creating connection");
                let provider = self.connector.connect(endpoint).await?;
                provider.ensure_index_exists(index).await?;
                info!("Connection established");
                Ok::<_, SearchIndexError>(provider)
            })
            .await
            .map(|_| ())
    }

    /// Submit a document to `index`.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The document was submitted
    /// * `Ok(false)` - Not connected; nothing was sent
    /// * `Err(SearchIndexError)` - The submission failed
    #[instrument(skip(self, document), fields(event_id = ?document.id()))]
    pub async fn submit(
        &self,
        index: &str,
        document: &EventDocument,
    ) -> Result<bool, SearchIndexError> {
        let Some(provider) = self.connection.get() else {
            debug!("Not connected, skipping submission");
            return Ok(false);
        };

        debug!(fields = ?document.keys().collect::<Vec<_>>(), "Indexing document");
        provider.submit_document(index, document).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Map;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock search provider for testing.
    #[derive(Default)]
    struct MockSearchProvider {
        exists: bool,
        created_count: AtomicUsize,
        submitted_count: AtomicUsize,
    }

    #[async_trait]
    impl SearchIndexProvider for MockSearchProvider {
        async fn index_exists(&self, _index: &str) -> Result<bool, SearchIndexError> {
            Ok(self.exists)
        }

        async fn create_index(&self, _index: &str) -> Result<(), SearchIndexError> {
            self.created_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn submit_document(
            &self,
            _index: &str,
            _document: &EventDocument,
        ) -> Result<(), SearchIndexError> {
            self.submitted_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Connector that fails a fixed number of times before handing out the provider.
    struct MockConnector {
        provider: Arc<MockSearchProvider>,
        failures_left: AtomicUsize,
        connect_count: AtomicUsize,
    }

    impl MockConnector {
        fn new(provider: Arc<MockSearchProvider>, failures: usize) -> Self {
            Self {
                provider,
                failures_left: AtomicUsize::new(failures),
                connect_count: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SearchIndexConnector for MockConnector {
        async fn connect(
            &self,
            _endpoint: &str,
        ) -> Result<Arc<dyn SearchIndexProvider>, SearchIndexError> {
            self.connect_count.fetch_add(1, Ordering::SeqCst);
            let failures = self.failures_left.load(Ordering::SeqCst);
            if failures > 0 {
                self.failures_left.store(failures - 1, Ordering::SeqCst);
                return Err(SearchIndexError::connection("connection refused"));
            }
            Ok(self.provider.clone() as Arc<dyn SearchIndexProvider>)
        }
    }

    fn document() -> EventDocument {
        EventDocument::new(1, Map::new())
    }

    #[tokio::test]
    async fn test_submit_before_connect_is_noop() {
        let provider = Arc::new(MockSearchProvider::default());
        let loader = SearchLoader::new(Arc::new(MockConnector::new(provider.clone(), 0)));

        let submitted = loader.submit("sentry-backend", &document()).await.unwrap();

        assert!(!submitted);
        assert_eq!(provider.submitted_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_connect_creates_missing_index_then_submits() {
        let provider = Arc::new(MockSearchProvider::default());
        let loader = SearchLoader::new(Arc::new(MockConnector::new(provider.clone(), 0)));

        loader.connect("127.0.0.1:9500", "sentry-backend").await.unwrap();
        loader.connect("127.0.0.1:9500", "sentry-backend").await.unwrap();
        let submitted = loader.submit("sentry-backend", &document()).await.unwrap();

        assert!(loader.is_connected());
        assert!(submitted);
        assert_eq!(provider.created_count.load(Ordering::SeqCst), 1);
        assert_eq!(provider.submitted_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_connect_is_retried() {
        let provider = Arc::new(MockSearchProvider {
            exists: true,
            ..Default::default()
        });
        let connector = Arc::new(MockConnector::new(provider.clone(), 1));
        let loader = SearchLoader::new(connector.clone());

        let first = loader.connect("127.0.0.1:9500", "sentry-backend").await;
        assert!(matches!(first, Err(SearchIndexError::ConnectionError(_))));
        assert!(!loader.is_connected());

        loader.connect("127.0.0.1:9500", "sentry-backend").await.unwrap();
        assert!(loader.is_connected());
        assert_eq!(connector.connect_count.load(Ordering::SeqCst), 2);
        assert_eq!(provider.created_count.load(Ordering::SeqCst), 0);
    }
}
