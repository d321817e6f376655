//! # Event Indexer
//!
//! Indexes the extra data of newly created error events into a search index,
//! so events can be found by tag values the host's own datastore cannot query
//! efficiently.
//!
//! ## Architecture
//!
//! The host calls [`IndexingAdapter::on_event_created`] once per event. The
//! adapter follows a Processor-Loader split:
//!
//! 1. **Config**: Reads per-project options from the host's option store
//! 2. **Processor**: Extracts an `EventDocument` from the event's extra data
//! 3. **Loader**: Lazily connects, ensures the index exists, and submits documents
//! 4. **Adapter**: Gates on configuration and first occurrence, and coordinates the flow
//!
//! Every failure below the adapter is logged and swallowed; nothing is
//! returned to the host's event pipeline.
//!
//! ## Modules
//!
//! - [`adapter`]: The indexing adapter invoked by the host
//! - [`config`]: Option store contract and project options
//! - [`processor`]: Payload extraction
//! - [`loader`]: Connection management and submission
//! - [`plugin`]: Plugin metadata and configuration field descriptors
//! - [`telemetry`]: Tracing subscriber setup
//! - [`errors`]: Error types for the adapter

pub mod adapter;
pub mod config;
pub mod errors;
pub mod loader;
pub mod plugin;
pub mod processor;
pub mod telemetry;

pub use adapter::{AdapterState, IndexingAdapter};
pub use config::{EnvOptionStore, InMemoryOptionStore, OptionStore, ProjectOptions};
pub use errors::IndexingError;
