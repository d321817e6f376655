//! Plugin metadata.
//!
//! Describes the indexer to a host that lists plugins and renders a per-project
//! settings form. Rendering and storing the values is the host's business; the
//! indexer reads them back through [`OptionStore`](crate::config::OptionStore).

use serde::Serialize;

use crate::config::{DEFAULT_CONNECTION_STRING, ES_CONN_STRING, ES_INDEX_NAME};

/// Plugin slug used by the host to register the plugin.
pub const PLUGIN_SLUG: &str = "elasticsearch";

/// Human-readable plugin title.
pub const PLUGIN_TITLE: &str = "ElasticSearch";

/// Short description shown in the host's plugin list.
pub const PLUGIN_DESCRIPTION: &str = "ElasticSearch indexing of event extra data";

/// A per-project setting the host should offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigField {
    /// Option key the value is stored under.
    pub key: &'static str,
    pub label: &'static str,
    /// Value pre-filled in the form.
    pub initial: Option<&'static str>,
    pub help_text: &'static str,
    pub required: bool,
}

/// Plugin descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginInfo {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub fields: Vec<ConfigField>,
}

/// The settings offered for each project.
pub fn config_fields() -> Vec<ConfigField> {
    vec![
        ConfigField {
            key: ES_CONN_STRING,
            label: "ElasticSearch Connection String",
            initial: Some(DEFAULT_CONNECTION_STRING),
            help_text: "host:port of the search cluster (e.g., localhost:9500), or a full http(s) URL",
            required: true,
        },
        ConfigField {
            key: ES_INDEX_NAME,
            label: "ElasticSearch Index Name",
            initial: None,
            help_text: "If left blank, the index will be sentry-<project_slug>",
            required: false,
        },
    ]
}

/// Describe the plugin.
pub fn plugin_info() -> PluginInfo {
    PluginInfo {
        slug: PLUGIN_SLUG,
        title: PLUGIN_TITLE,
        description: PLUGIN_DESCRIPTION,
        version: env!("CARGO_PKG_VERSION"),
        fields: config_fields(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_fields() {
        let fields = config_fields();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].key, "es_conn_string");
        assert_eq!(fields[0].initial, Some("127.0.0.1:9500"));
        assert!(fields[0].required);
        assert_eq!(fields[1].key, "es_index_name");
        assert!(!fields[1].required);
    }

    #[test]
    fn test_plugin_info_serialization() {
        let info = serde_json::to_value(plugin_info()).unwrap();

        assert_eq!(info["slug"], json!("elasticsearch"));
        assert_eq!(info["version"], json!(env!("CARGO_PKG_VERSION")));
        assert_eq!(info["fields"][1]["initial"], json!(null));
    }
}
