//! Utility functions for the event indexer repository.

use url::Url;

use crate::errors::SearchIndexError;

/// Parse a user-supplied connection string into a server URL.
///
/// Connection strings are typically entered as bare `host:port` pairs
/// (e.g. `127.0.0.1:9500`); those are treated as plain HTTP. Full `http://` and
/// `https://` URLs are accepted as-is. Surrounding whitespace is ignored.
///
/// # Arguments
///
/// * `connection_string` - The configured connection string
///
/// # Returns
///
/// * `Ok(Url)` - The parsed server URL
/// * `Err(SearchIndexError)` - If the string is empty, unparsable, or uses another scheme
///
/// # Example
///
/// ```
/// use event_indexer_repository::parse_connection_string;
///
/// let url = parse_connection_string("127.0.0.1:9500").expect("valid connection string");
/// assert_eq!(url.as_str(), "http://127.0.0.1:9500/");
/// ```
pub fn parse_connection_string(connection_string: &str) -> Result<Url, SearchIndexError> {
    let trimmed = connection_string.trim();
    if trimmed.is_empty() {
        return Err(SearchIndexError::validation(
            "Connection string cannot be empty",
        ));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    let url = Url::parse(&candidate).map_err(|e| {
        SearchIndexError::validation(format!(
            "Invalid connection string '{}': {}",
            connection_string, e
        ))
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(SearchIndexError::validation(format!(
                "Unsupported scheme '{}' in connection string",
                other
            )))
        }
    }

    if url.host_str().is_none() {
        return Err(SearchIndexError::validation(format!(
            "Connection string '{}' has no host",
            connection_string
        )));
    }

    Ok(url)
}
