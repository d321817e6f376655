//! # Event Indexer Repository
//!
//! This crate provides traits and implementations for talking to the remote
//! search index. It includes definitions for errors, the connector and
//! provider interfaces, and a concrete implementation for OpenSearch (which
//! also speaks to Elasticsearch-compatible clusters).

pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod utils;

pub use errors::SearchIndexError;
pub use interfaces::{SearchIndexConnector, SearchIndexProvider};
pub use opensearch::{OpenSearchConnector, OpenSearchProvider};
pub use utils::parse_connection_string;
