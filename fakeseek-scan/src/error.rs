//! Error types for the fakeseek-scan crate.
//!
//! Display strings are stable so callers can match on them in logs and
//! tests. Search-provider failures (`Network`, `Timeout`, `HttpStatus`) are
//! absorbed per query by the scanner; the remaining variants reach the caller.

/// Errors that can occur while planning, fetching, or aggregating a scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A name part was missing or blank. Raised before any network access.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The request to the search provider could not be completed.
    #[error("network error: {0}")]
    Network(String),

    /// The search provider did not answer within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The search provider answered with a non-success status code.
    #[error("HTTP status {status}: {message}")]
    HttpStatus {
        /// Numeric HTTP status returned by the provider.
        status: u16,
        /// Short description of the failed request.
        message: String,
    },

    /// An extraction rule could not be compiled.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid scan configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The scan was cancelled before it completed.
    #[error("scan cancelled")]
    Cancelled,
}

impl ScanError {
    /// Returns `true` for failures of a single provider request, which the
    /// scanner downgrades to "zero candidates for this query".
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout(_) | Self::HttpStatus { .. }
        )
    }
}

/// Convenience type alias for fakeseek-scan results.
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_input() {
        let err = ScanError::InvalidInput("first name must not be blank".into());
        assert_eq!(
            err.to_string(),
            "invalid input: first name must not be blank"
        );
    }

    #[test]
    fn display_http_status() {
        let err = ScanError::HttpStatus {
            status: 429,
            message: "too many requests".into(),
        };
        assert_eq!(err.to_string(), "HTTP status 429: too many requests");
    }

    #[test]
    fn display_timeout() {
        let err = ScanError::Timeout("exceeded 10s limit".into());
        assert_eq!(err.to_string(), "request timed out: exceeded 10s limit");
    }

    #[test]
    fn display_cancelled() {
        assert_eq!(ScanError::Cancelled.to_string(), "scan cancelled");
    }

    #[test]
    fn provider_failures_are_classified() {
        assert!(ScanError::Network("refused".into()).is_provider_failure());
        assert!(ScanError::Timeout("slow".into()).is_provider_failure());
        assert!(ScanError::HttpStatus {
            status: 503,
            message: "unavailable".into()
        }
        .is_provider_failure());
        assert!(!ScanError::InvalidInput("blank".into()).is_provider_failure());
        assert!(!ScanError::Cancelled.is_provider_failure());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScanError>();
    }
}
