//! This module defines the core data structures used across the event indexer.
//! It re-exports the host types and `EventDocument`.

pub mod event;
pub mod event_document;

pub use event::{Event, Group, Project};
pub use event_document::EventDocument;
