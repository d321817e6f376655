//! Host-side event types.
//!
//! These mirror the pieces of the host monitoring application that the
//! indexer reads: the project an event belongs to, the group (deduplication
//! bucket) it landed in, and the event itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A monitored project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Project {
    /// Numeric project identifier assigned by the host.
    pub id: u64,
    /// URL-safe project slug, used to derive the default index name.
    pub slug: String,
}

impl Project {
    /// Create a new project.
    pub fn new(id: u64, slug: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
        }
    }
}

/// The deduplication bucket an event was assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// The project owning this group.
    pub project: Project,
}

impl Group {
    /// Create a group owned by the given project.
    pub fn new(project: Project) -> Self {
        Self { project }
    }
}

/// A single captured error event.
///
/// `extra` holds the free-form key/value attributes the reporting application
/// attached to the event. It is `None` when the event carries no extra data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

impl Event {
    /// Create an event without extra data.
    pub fn new(id: u64) -> Self {
        Self { id, extra: None }
    }

    /// Attach extra data to the event.
    pub fn with_extra(mut self, extra: Value) -> Self {
        self.extra = Some(extra);
        self
    }
}
