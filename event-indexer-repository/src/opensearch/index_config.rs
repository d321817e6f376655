//! OpenSearch index configuration and mappings.
//!
//! This module defines the index naming scheme and the settings used when an
//! event index has to be created.

use serde_json::{json, Value};

/// Prefix of derived index names.
pub const INDEX_NAME_PREFIX: &str = "sentry";

/// Get the default index name for a project.
///
/// # Arguments
///
/// * `project_slug` - The project's slug
///
/// # Returns
///
/// The derived index name (e.g., "sentry-backend")
pub fn default_index_name(project_slug: &str) -> String {
    format!("{}-{}", INDEX_NAME_PREFIX, project_slug)
}

/// Get the index settings and mappings for an event index.
///
/// Extra data is free-form, so mappings stay dynamic; only the event id is
/// pinned to a numeric type so id lookups are exact.
///
/// # Sharding Configuration
///
/// - 1 primary shard
/// - 1 replica for redundancy
pub fn get_index_settings() -> Value {
    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        },
        "mappings": {
            "dynamic": true,
            "properties": {
                "id": {
                    "type": "long"
                }
            }
        }
    })
}
