//! Per-project configuration.
//!
//! The host owns option storage; the indexer only reads two keys per project
//! through the [`OptionStore`] trait. Two stores are provided for hosts that
//! do not bring their own: an in-memory map and an environment-backed store.

mod options;
mod stores;

pub use options::{
    OptionStore, ProjectOptions, DEFAULT_CONNECTION_STRING, ES_CONN_STRING, ES_INDEX_NAME,
};
pub use stores::{EnvOptionStore, InMemoryOptionStore, ENV_CONNECTION_STRING, ENV_INDEX_NAME};
