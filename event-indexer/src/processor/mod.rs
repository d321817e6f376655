//! Processor module for the event indexer.
//!
//! Turns host events into documents ready for the search index.

mod event_processor;

pub use event_processor::EventProcessor;
