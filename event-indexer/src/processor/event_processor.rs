//! Event processor implementation.
//!
//! Extracts the extra data of an event into an `EventDocument`.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::errors::IndexingError;
use event_indexer_shared::{Event, EventDocument};

/// Processor that transforms events into search documents.
///
/// Only the event's extra data is indexed; the event id is added under `id`.
#[derive(Debug, Default)]
pub struct EventProcessor;

impl EventProcessor {
    /// Create a new event processor.
    pub fn new() -> Self {
        Self
    }

    /// Extract the document to index from an event.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(document))` - The extra data plus the event id
    /// * `Ok(None)` - The event carries no extra data
    /// * `Err(IndexingError::PayloadError)` - The extra data is not a key/value object
    #[instrument(skip(self, event), fields(event_id = event.id))]
    pub fn extract_document(&self, event: &Event) -> Result<Option<EventDocument>, IndexingError> {
        match event.extra {
            None | Some(Value::Null) => {
                debug!("Event has no extra data");
                Ok(None)
            }
            Some(Value::Object(ref extra)) => {
                let document = EventDocument::new(event.id, extra.clone());
                debug!(fields = ?document.keys().collect::<Vec<_>>(), "Extracted document");
                Ok(Some(document))
            }
            Some(ref other) => Err(IndexingError::payload(format!(
                "expected an object of extra data, got {}",
                json_type_name(other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
