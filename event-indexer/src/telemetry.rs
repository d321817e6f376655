//! Tracing setup for hosts that do not install their own subscriber.

use std::env;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::IndexingError;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "event_indexer=info,event_indexer_repository=info";

/// Initialize tracing/logging.
///
/// Uses JSON output when `LOG_FORMAT=json`, pretty console output otherwise.
/// The log level comes from `RUST_LOG`.
///
/// # Returns
///
/// * `Ok(())` - If the subscriber was installed
/// * `Err(IndexingError)` - If a global subscriber is already set
pub fn init_tracing() -> Result<(), IndexingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .try_init()
            .map_err(|e| IndexingError::config(format!("Failed to initialize tracing: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .try_init()
            .map_err(|e| IndexingError::config(format!("Failed to initialize tracing: {}", e)))?;
    }

    info!(
        service_name = "event-indexer",
        service_version = env!("CARGO_PKG_VERSION"),
        json,
        "Tracing initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_fails() {
        // Whichever call comes first may succeed; a second one never does.
        let _ = init_tracing();
        assert!(matches!(
            init_tracing(),
            Err(IndexingError::ConfigError(_))
        ));
    }
}
