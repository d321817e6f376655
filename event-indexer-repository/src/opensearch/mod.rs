//! OpenSearch implementation of the search index connector and provider.
//!
//! This module provides concrete implementations of `SearchIndexConnector`
//! and `SearchIndexProvider` using OpenSearch as the backend.

mod index_config;
mod provider;

pub use index_config::{default_index_name, get_index_settings, INDEX_NAME_PREFIX};
pub use provider::{OpenSearchConnector, OpenSearchProvider};
