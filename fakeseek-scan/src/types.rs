//! Core types for extracted candidates, scored results, and scan reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate result extracted from one search-provider response page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The result title. Never empty.
    pub title: String,
    /// The result link. Never empty.
    pub link: String,
    /// A text snippet summarising the page. May be empty.
    pub snippet: String,
}

impl SearchResult {
    /// Text fed to the relevance scorer: title and snippet joined by a space.
    pub fn scoring_text(&self) -> String {
        format!("{} {}", self.title, self.snippet)
    }
}

/// A [`SearchResult`] with its relevance verdict and originating query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    /// The result title.
    pub title: String,
    /// The result link.
    pub link: String,
    /// The result snippet.
    pub snippet: String,
    /// Whether the text was classified as deepfake-related.
    #[serde(rename = "is_deepfake_related")]
    pub is_related: bool,
    /// Ratio of deepfake-indicator hits to all indicator hits, in `[0, 1]`.
    pub confidence: f64,
    /// The planned query that produced this result.
    pub query_used: String,
}

impl ScoredResult {
    /// Attach a relevance verdict and query tag to an extracted candidate.
    pub fn new(result: SearchResult, relevance: Relevance, query: &str) -> Self {
        Self {
            title: result.title,
            link: result.link,
            snippet: result.snippet,
            is_related: relevance.is_related,
            confidence: relevance.confidence,
            query_used: query.to_owned(),
        }
    }
}

/// Output of the relevance scorer for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relevance {
    /// Whether confidence exceeded the configured threshold.
    pub is_related: bool,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

impl Relevance {
    /// Verdict for text with no indicator terms at all.
    pub const NONE: Self = Self {
        is_related: false,
        confidence: 0.0,
    };
}

/// Overall verdict of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    /// No results were related (or no results at all).
    Clean,
    /// At least one related result was found.
    Found,
}

impl ScanStatus {
    /// Returns the lowercase wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Found => "found",
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final report of one scan.
///
/// Built through [`ScanReport::from_results`], which derives the counters,
/// status and message from the result list. Deserialisation rejects a report
/// whose counters or status disagree with its results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScanReport")]
pub struct ScanReport {
    /// Overall verdict.
    pub status: ScanStatus,
    /// Human-readable summary.
    pub message: String,
    /// The scanned name, `"<first> <last>"`.
    pub full_name: String,
    /// Number of scored results. Always `results.len()`.
    pub total_results: usize,
    /// Number of results flagged as related.
    #[serde(rename = "deepfake_related_count")]
    pub related_count: usize,
    /// Results in query-planning order, then extraction order.
    pub results: Vec<ScoredResult>,
    /// When the scan completed.
    #[serde(rename = "scan_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl ScanReport {
    /// Derive a report from the accumulated results of a completed scan.
    pub fn from_results(
        full_name: impl Into<String>,
        results: Vec<ScoredResult>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let total_results = results.len();
        let related_count = results.iter().filter(|r| r.is_related).count();

        let (status, message) = if related_count == 0 {
            (
                ScanStatus::Clean,
                "No deepfake content found - your digital identity appears safe!".to_owned(),
            )
        } else {
            (
                ScanStatus::Found,
                format!("Found {related_count} potential deepfake-related results"),
            )
        };

        Self {
            status,
            message,
            full_name: full_name.into(),
            total_results,
            related_count,
            results,
            timestamp,
        }
    }
}

/// Wire shape of a [`ScanReport`] before its invariants are checked.
#[derive(Deserialize)]
struct RawScanReport {
    status: ScanStatus,
    message: String,
    full_name: String,
    total_results: usize,
    deepfake_related_count: usize,
    results: Vec<ScoredResult>,
    scan_timestamp: DateTime<Utc>,
}

impl TryFrom<RawScanReport> for ScanReport {
    type Error = String;

    fn try_from(raw: RawScanReport) -> Result<Self, Self::Error> {
        let total_results = raw.results.len();
        if raw.total_results != total_results {
            return Err(format!(
                "total_results is {} but the report holds {total_results} results",
                raw.total_results
            ));
        }

        let related_count = raw.results.iter().filter(|r| r.is_related).count();
        if raw.deepfake_related_count != related_count {
            return Err(format!(
                "deepfake_related_count is {} but {related_count} results are related",
                raw.deepfake_related_count
            ));
        }

        let status = if related_count == 0 {
            ScanStatus::Clean
        } else {
            ScanStatus::Found
        };
        if raw.status != status {
            return Err(format!(
                "status is {} but {related_count} results are related",
                raw.status
            ));
        }

        Ok(Self {
            status,
            message: raw.message,
            full_name: raw.full_name,
            total_results,
            related_count,
            results: raw.results,
            timestamp: raw.scan_timestamp,
        })
    }
}
