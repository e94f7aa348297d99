//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::{Config, FETCH_TIMEOUT};

/// Initializes the shared HTTP client used for page fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - `FETCH_TIMEOUT` covering the whole request, body included
/// - Redirect following enabled (reqwest default policy)
///
/// The client is built once at startup and shared by every request.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(FETCH_TIMEOUT)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
