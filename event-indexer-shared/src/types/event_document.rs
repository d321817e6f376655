//! Event document types for the search index.
//!
//! This module defines the document structure that is submitted to the search
//! engine for every indexed event.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key under which the event identifier is stored in every document.
pub const EVENT_ID_FIELD: &str = "id";

/// Document representation for the search index.
///
/// The document is the event's extra data, verbatim, plus the event
/// identifier under [`EVENT_ID_FIELD`]. It serializes as a flat JSON object so
/// the search engine indexes every extra attribute as a top-level field.
///
/// # Example
///
/// ```
/// use event_indexer_shared::EventDocument;
/// use serde_json::{json, Map};
///
/// let mut extra = Map::new();
/// extra.insert("a".to_string(), json!(1));
///
/// let doc = EventDocument::new(42, extra);
/// assert_eq!(serde_json::to_value(&doc).unwrap(), json!({"a": 1, "id": 42}));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct EventDocument(Map<String, Value>);

impl EventDocument {
    /// Build a document from extra data, setting the event id.
    ///
    /// An `id` key already present in `extra` is overwritten.
    pub fn new(event_id: u64, mut extra: Map<String, Value>) -> Self {
        extra.insert(EVENT_ID_FIELD.to_string(), Value::from(event_id));
        Self(extra)
    }

    /// The event identifier stored in the document.
    pub fn id(&self) -> Option<u64> {
        self.0.get(EVENT_ID_FIELD).and_then(Value::as_u64)
    }

    /// Field names of the document.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of fields, including the id.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the document as a JSON map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the document, returning the JSON map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<EventDocument> for Value {
    fn from(doc: EventDocument) -> Self {
        Value::Object(doc.0)
    }
}
