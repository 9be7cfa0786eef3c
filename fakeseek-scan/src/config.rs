//! Scan configuration with sensible defaults.
//!
//! [`ClientConfig`] is the immutable configuration handed to a search client
//! at construction. [`ScanConfig`] wraps it together with the aggregation
//! policy (per-query limit, confidence threshold, link deduplication).

use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::orchestrator::scoring::DEFAULT_THRESHOLD;

/// Default desktop browser signature sent with every provider request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for a single search client instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and host of the search provider, without a trailing slash.
    pub base_url: String,
    /// User-Agent header identifying the client.
    pub user_agent: String,
    /// Minimum delay in milliseconds between consecutive requests.
    pub min_request_delay_ms: u64,
    /// Upper bound in milliseconds of a random extra delay added on top of
    /// the minimum. Zero disables jitter.
    pub request_jitter_ms: u64,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.google.com".to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            min_request_delay_ms: 1000,
            request_jitter_ms: 0,
            timeout_seconds: 10,
        }
    }
}

impl ClientConfig {
    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.base_url.trim().is_empty() {
            return Err(ScanError::Config("base_url must not be empty".into()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ScanError::Config("user_agent must not be empty".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(ScanError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration for a full deepfake scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Search client settings.
    pub client: ClientConfig,
    /// Result count requested from the provider for each query.
    pub results_per_query: usize,
    /// A candidate is flagged when its confidence is strictly above this value.
    pub confidence_threshold: f64,
    /// Skip candidates whose normalised link was already seen in this scan.
    pub dedup_by_link: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            results_per_query: 5,
            confidence_threshold: DEFAULT_THRESHOLD,
            dedup_by_link: false,
        }
    }
}

impl ScanConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `results_per_query` must be greater than 0
    /// - `confidence_threshold` must lie in `[0.0, 1.0)`
    /// - the nested [`ClientConfig`] must be valid
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.results_per_query == 0 {
            return Err(ScanError::Config(
                "results_per_query must be greater than 0".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.confidence_threshold) {
            return Err(ScanError::Config(
                "confidence_threshold must be in [0.0, 1.0)".into(),
            ));
        }
        self.client.validate()
    }
}
