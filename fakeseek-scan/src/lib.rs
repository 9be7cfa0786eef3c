//! # fakeseek-scan
//!
//! Scans public web-search results for signs that a named person is the
//! subject of deepfake or otherwise manipulated media, and produces a
//! relevance-scored [`ScanReport`].
//!
//! ## Pipeline
//!
//! - Six fixed queries pair the quoted full name with indicator phrases
//! - Each query goes through a throttled, timeout-bounded [`SearchClient`]
//! - Result pages are parsed with ordered fallback CSS strategies
//! - Candidates are scored lexically against deepfake and legitimacy terms
//! - A failing query counts as zero results; the scan carries on
//!
//! ## Limits
//!
//! Scoring is a keyword heuristic. No media is downloaded or analysed, and a
//! scan whose every query failed is reported as `clean`.

pub mod client;
pub mod config;
pub mod engines;
pub mod error;
pub mod extract;
pub mod http;
pub mod orchestrator;
pub mod query;
pub mod throttle;
pub mod types;

pub use client::SearchClient;
pub use config::{ClientConfig, ScanConfig};
pub use engines::GoogleClient;
pub use error::{Result, ScanError};
pub use extract::ResultExtractor;
pub use orchestrator::{RelevanceScorer, Scanner};
pub use query::plan_queries;
pub use types::{Relevance, ScanReport, ScanStatus, ScoredResult, SearchResult};

use tokio_util::sync::CancellationToken;

/// Scan the web for deepfake-related results about a person.
///
/// Builds a [`GoogleClient`] from `config.client` and runs one scan.
///
/// # Errors
///
/// Returns [`ScanError::Config`] for invalid configuration and
/// [`ScanError::InvalidInput`] for blank names. Provider failures are
/// absorbed and reduce `total_results` instead.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> fakeseek_scan::Result<()> {
/// let config = fakeseek_scan::ScanConfig::default();
/// let report = fakeseek_scan::scan("Jane", "Roe", &config).await?;
/// println!("{}: {}", report.status, report.message);
/// # Ok(())
/// # }
/// ```
pub async fn scan(first_name: &str, last_name: &str, config: &ScanConfig) -> Result<ScanReport> {
    scan_with_cancel(first_name, last_name, config, &CancellationToken::new()).await
}

/// Like [`scan`], but stops with [`ScanError::Cancelled`] when `cancel` fires.
///
/// # Errors
///
/// Same as [`scan`], plus [`ScanError::Cancelled`].
pub async fn scan_with_cancel(
    first_name: &str,
    last_name: &str,
    config: &ScanConfig,
    cancel: &CancellationToken,
) -> Result<ScanReport> {
    config.validate()?;
    query::full_name(first_name, last_name)?;
    let client = GoogleClient::new(config.client.clone())?;
    Scanner::new(client, config.clone())?
        .scan_with_cancel(first_name, last_name, cancel)
        .await
}
