//! Interface definitions for the search index client.
//!
//! This module defines the abstract `SearchIndexConnector` and
//! `SearchIndexProvider` traits that allow for dependency injection and
//! swappable search backend implementations.

mod search_index_connector;
mod search_index_provider;

pub use search_index_connector::SearchIndexConnector;
pub use search_index_provider::SearchIndexProvider;
