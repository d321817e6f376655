//! Option keys and project option resolution.

use event_indexer_repository::opensearch::default_index_name;
use event_indexer_shared::Project;

/// Option key of the search index connection string.
pub const ES_CONN_STRING: &str = "es_conn_string";

/// Option key of the (optional) index name.
pub const ES_INDEX_NAME: &str = "es_index_name";

/// Connection string suggested to users when configuring a project.
pub const DEFAULT_CONNECTION_STRING: &str = "127.0.0.1:9500";

/// Read-only, per-project key/value option store provided by the host.
pub trait OptionStore: Send + Sync {
    /// Get the value of `key` for `project`, or `None` if unset.
    fn get_option(&self, key: &str, project: &Project) -> Option<String>;
}

/// The indexer's settings for one project.
///
/// Blank values (empty or whitespace only) are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectOptions {
    /// Connection string of the search index service.
    pub connection_string: Option<String>,
    /// Explicit index name, if configured.
    pub index_name: Option<String>,
}

impl ProjectOptions {
    /// Read both settings for `project` from the store.
    pub fn from_store(store: &dyn OptionStore, project: &Project) -> Self {
        Self {
            connection_string: non_blank(store.get_option(ES_CONN_STRING, project)),
            index_name: non_blank(store.get_option(ES_INDEX_NAME, project)),
        }
    }

    /// Whether both the connection string and the index name are set.
    pub fn is_configured(&self) -> bool {
        self.connection_string.is_some() && self.index_name.is_some()
    }

    /// The index to write to: the explicit name verbatim, or `sentry-<slug>`.
    pub fn resolve_index_name(&self, project: &Project) -> String {
        match self.index_name {
            Some(ref name) => name.clone(),
            None => default_index_name(&project.slug),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
