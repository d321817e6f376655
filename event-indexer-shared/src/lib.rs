//! # Event Indexer Shared
//!
//! This crate defines the data structures shared between the indexing adapter
//! and the search index repository: the host-facing `Project`, `Group` and
//! `Event` types, and the `EventDocument` submitted to the search index.

pub mod types;

pub use types::event::{Event, Group, Project};
pub use types::event_document::{EventDocument, EVENT_ID_FIELD};
