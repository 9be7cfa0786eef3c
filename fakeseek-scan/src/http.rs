//! Shared HTTP client construction and error mapping for provider requests.
//!
//! The client carries a fixed User-Agent and timeout taken from
//! [`ClientConfig`], plus a cookie store for provider consent pages.

use crate::config::ClientConfig;
use crate::error::ScanError;
use std::time::Duration;

/// Build a [`reqwest::Client`] configured for provider scraping.
///
/// # Errors
///
/// Returns [`ScanError::Config`] if the client cannot be constructed.
pub fn build_client(config: &ClientConfig) -> Result<reqwest::Client, ScanError> {
    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| ScanError::Config(format!("failed to build HTTP client: {e}")))
}

/// Classify a [`reqwest::Error`] into the typed provider failures.
pub fn classify_error(err: &reqwest::Error) -> ScanError {
    if err.is_timeout() {
        return ScanError::Timeout(err.to_string());
    }
    if let Some(status) = err.status() {
        return ScanError::HttpStatus {
            status: status.as_u16(),
            message: err.to_string(),
        };
    }
    ScanError::Network(err.to_string())
}
