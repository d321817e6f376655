//! Option store implementations.

use std::collections::HashMap;
use std::env;
use std::sync::{PoisonError, RwLock};

use dotenv::dotenv;
use tracing::info;

use crate::config::options::{OptionStore, ES_CONN_STRING, ES_INDEX_NAME};
use event_indexer_shared::Project;

/// Environment variable holding the connection string.
pub const ENV_CONNECTION_STRING: &str = "EVENT_INDEXER_CONNECTION_STRING";

/// Environment variable holding the index name.
pub const ENV_INDEX_NAME: &str = "EVENT_INDEXER_INDEX_NAME";

/// Option store backed by a map, keyed by project id and option key.
///
/// Values can be changed at any time; the adapter re-reads them on every event.
#[derive(Debug, Default)]
pub struct InMemoryOptionStore {
    options: RwLock<HashMap<(u64, String), String>>,
}

impl InMemoryOptionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value` for `project`.
    pub fn set_option(&self, project: &Project, key: &str, value: impl Into<String>) {
        self.options
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((project.id, key.to_string()), value.into());
    }

    /// Remove `key` for `project`.
    pub fn remove_option(&self, project: &Project, key: &str) {
        self.options
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&(project.id, key.to_string()));
    }
}

impl OptionStore for InMemoryOptionStore {
    fn get_option(&self, key: &str, project: &Project) -> Option<String> {
        self.options
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(project.id, key.to_string()))
            .cloned()
    }
}

/// Option store reading the same settings for every project from the environment.
///
/// # Environment Variables
///
/// - `EVENT_INDEXER_CONNECTION_STRING`: connection string (e.g. 127.0.0.1:9500)
/// - `EVENT_INDEXER_INDEX_NAME`: index name
#[derive(Debug, Clone, Default)]
pub struct EnvOptionStore {
    connection_string: Option<String>,
    index_name: Option<String>,
}

impl EnvOptionStore {
    /// Load settings from the environment, including a `.env` file if present.
    pub fn from_env() -> Self {
        dotenv().ok();

        let store = Self {
            connection_string: env::var(ENV_CONNECTION_STRING).ok(),
            index_name: env::var(ENV_INDEX_NAME).ok(),
        };

        info!(
            connection_string = ?store.connection_string,
            index_name = ?store.index_name,
            "Loaded indexer options from environment"
        );

        store
    }

    /// Build a store from explicit values.
    pub fn new(connection_string: Option<String>, index_name: Option<String>) -> Self {
        Self {
            connection_string,
            index_name,
        }
    }
}

impl OptionStore for EnvOptionStore {
    fn get_option(&self, key: &str, _project: &Project) -> Option<String> {
        match key {
            ES_CONN_STRING => self.connection_string.clone(),
            ES_INDEX_NAME => self.index_name.clone(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_set_get_remove() {
        let store = InMemoryOptionStore::new();
        let project = Project::new(1, "backend");

        assert!(store.get_option(ES_CONN_STRING, &project).is_none());

        store.set_option(&project, ES_CONN_STRING, "localhost:9200");
        assert_eq!(
            store.get_option(ES_CONN_STRING, &project).as_deref(),
            Some("localhost:9200")
        );

        store.remove_option(&project, ES_CONN_STRING);
        assert!(store.get_option(ES_CONN_STRING, &project).is_none());
    }

    #[test]
    fn test_env_store_applies_to_every_project() {
        let store = EnvOptionStore::new(Some("localhost:9200".to_string()), None);

        for project in [Project::new(1, "a"), Project::new(2, "b")] {
            assert_eq!(
                store.get_option(ES_CONN_STRING, &project).as_deref(),
                Some("localhost:9200")
            );
            assert!(store.get_option(ES_INDEX_NAME, &project).is_none());
        }
    }

    #[test]
    fn test_env_store_unknown_key() {
        let store = EnvOptionStore::new(Some("x:1".to_string()), Some("idx".to_string()));
        assert!(store
            .get_option("unrelated", &Project::new(1, "a"))
            .is_none());
    }
}
