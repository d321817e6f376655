//! The indexing adapter invoked by the host for every new event.
//!
//! The adapter gates on configuration and first occurrence, resolves the index
//! name once, connects lazily, and hands the event's payload to the loader.
//! Every failure is logged at `warn` and swallowed.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, instrument, warn};

use crate::config::{OptionStore, ProjectOptions};
use crate::loader::SearchLoader;
use crate::processor::EventProcessor;
use event_indexer_repository::{OpenSearchConnector, SearchIndexConnector, SearchIndexError};
use event_indexer_shared::{Event, Group, Project};

/// Lifecycle of an adapter instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterState {
    /// No qualifying event seen yet.
    Uninitialized,
    /// Index name resolved, but no working connection.
    Degraded,
    /// Connected and the index exists.
    Ready,
}

/// Indexes the extra data of first-occurrence events into a search index.
///
/// One adapter is expected per monitored project. The index name is resolved
/// once and kept for the adapter's lifetime; the connection is retried on each
/// qualifying event until it succeeds.
///
/// # Example
///
/// ```ignore
/// let options = Arc::new(InMemoryOptionStore::new());
/// options.set_option(&project, ES_CONN_STRING, "127.0.0.1:9500");
/// options.set_option(&project, ES_INDEX_NAME, "errors");
///
/// let adapter = IndexingAdapter::with_opensearch(options);
/// adapter.on_event_created(&event, true, &group).await;
/// ```
pub struct IndexingAdapter {
    options: Arc<dyn OptionStore>,
    processor: EventProcessor,
    loader: SearchLoader,
    index_name: OnceCell<String>,
}

impl IndexingAdapter {
    /// Create an adapter reading options from `options` and connecting through `connector`.
    pub fn new(options: Arc<dyn OptionStore>, connector: Arc<dyn SearchIndexConnector>) -> Self {
        debug!("New indexing adapter created");
        Self {
            options,
            processor: EventProcessor::new(),
            loader: SearchLoader::new(connector),
            index_name: OnceCell::new(),
        }
    }

    /// Create an adapter that connects to OpenSearch.
    pub fn with_opensearch(options: Arc<dyn OptionStore>) -> Self {
        Self::new(options, Arc::new(OpenSearchConnector::new()))
    }

    /// Whether both the connection string and the index name are set for `project`.
    pub fn is_configured(&self, project: &Project) -> bool {
        ProjectOptions::from_store(self.options.as_ref(), project).is_configured()
    }

    /// The resolved index name, once setup has run.
    pub fn index_name(&self) -> Option<&str> {
        self.index_name.get().map(String::as_str)
    }

    /// Whether a connection to the search index is established.
    pub fn is_connected(&self) -> bool {
        self.loader.is_connected()
    }

    pub fn state(&self) -> AdapterState {
        match (self.index_name.initialized(), self.loader.is_connected()) {
            (_, true) => AdapterState::Ready,
            (true, false) => AdapterState::Degraded,
            (false, false) => AdapterState::Uninitialized,
        }
    }

    /// Handle a newly created event.
    ///
    /// Does nothing for repeat occurrences or unconfigured projects. Never fails:
    /// errors from setup, payload extraction or submission are logged.
    #[instrument(
        skip_all,
        fields(event_id = event.id, project = %group.project.slug, first = is_first_occurrence)
    )]
    pub async fn on_event_created(&self, event: &Event, is_first_occurrence: bool, group: &Group) {
        debug!("Post processing event");

        if !is_first_occurrence || !self.is_configured(&group.project) {
            return;
        }

        if self.state() != AdapterState::Ready {
            self.setup(&group.project).await;
        }

        self.index(event).await;
    }

    /// Resolve the index name and establish the connection.
    ///
    /// The index name is resolved at most once. The connection is attempted
    /// only while absent; on failure the adapter stays degraded.
    #[instrument(skip_all, fields(project = %project.slug))]
    pub async fn setup(&self, project: &Project) {
        debug!("Setting up indexer");
        let options = ProjectOptions::from_store(self.options.as_ref(), project);
        let index = self.set_index(project, &options).await;
        self.set_connection(&options, index).await;
    }

    async fn set_index(&self, project: &Project, options: &ProjectOptions) -> &str {
        self.index_name
            .get_or_init(|| async move {
                let index = options.resolve_index_name(project);
                debug!(index = %index, "Index resolved");
                index
            })
            .await
    }

    async fn set_connection(&self, options: &ProjectOptions, index: &str) {
        if self.loader.is_connected() {
            return;
        }

        let Some(ref endpoint) = options.connection_string else {
            debug!("No connection string configured");
            return;
        };

        debug!(endpoint = %endpoint, "Setting up connection");
        if let Err(e) = self.loader.connect(endpoint, index).await {
            log_setup_error(&e, endpoint, index);
        }
    }

    async fn index(&self, event: &Event) {
        let Some(index) = self.index_name() else {
            return;
        };
        if !self.loader.is_connected() {
            debug!("No connection, skipping event");
            return;
        }

        let document = match self.processor.extract_document(event) {
            Ok(Some(document)) => document,
            Ok(None) => return,
            Err(e) => {
                warn!(error = %e, "Could not retrieve extra data");
                return;
            }
        };

        match self.loader.submit(index, &document).await {
            Ok(true) => debug!(index = %index, "Event indexed"),
            Ok(false) => {}
            Err(e) => warn!(index = %index, kind = e.kind(), error = %e, "Error indexing event"),
        }
    }
}

fn log_setup_error(error: &SearchIndexError, endpoint: &str, index: &str) {
    match error {
        SearchIndexError::ValidationError(_) | SearchIndexError::ConnectionError(_) => {
            warn!(endpoint = %endpoint, error = %error, "Error setting up the connection")
        }
        SearchIndexError::IndexLookupError(_) | SearchIndexError::IndexCreationError(_) => {
            warn!(index = %index, error = %error, "Error creating the index")
        }
        SearchIndexError::IndexError(_) => {
            warn!(index = %index, error = %error, "Unexpected error during setup")
        }
    }
}
