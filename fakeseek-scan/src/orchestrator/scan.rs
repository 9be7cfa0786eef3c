//! Scan aggregation: plan, fetch, extract, score, report.
//!
//! Queries run strictly one after another so the client's politeness
//! throttle governs a single stream of requests. A failing query contributes
//! zero candidates and the scan moves on; only invalid names, invalid
//! configuration and cancellation end a scan early.

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::client::SearchClient;
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::extract::ResultExtractor;
use crate::query::{full_name, plan_queries};
use crate::types::{ScanReport, ScoredResult};

use super::dedup::SeenLinks;
use super::scoring::RelevanceScorer;

/// Runs deepfake scans against a [`SearchClient`].
#[derive(Debug)]
pub struct Scanner<C> {
    client: C,
    extractor: ResultExtractor,
    scorer: RelevanceScorer,
    config: ScanConfig,
}

impl<C: SearchClient> Scanner<C> {
    /// Create a scanner using the built-in extraction rules.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Config`] if `config` is invalid.
    pub fn new(client: C, config: ScanConfig) -> Result<Self, ScanError> {
        Self::with_extractor(client, ResultExtractor::new()?, config)
    }

    /// Create a scanner with a custom extractor.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Config`] if `config` is invalid.
    pub fn with_extractor(
        client: C,
        extractor: ResultExtractor,
        config: ScanConfig,
    ) -> Result<Self, ScanError> {
        config.validate()?;
        Ok(Self {
            client,
            extractor,
            scorer: RelevanceScorer::new(config.confidence_threshold),
            config,
        })
    }

    /// The underlying search client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Scan for deepfake-related results about a person.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidInput`] if either name part is blank.
    /// Provider failures never surface here.
    pub async fn scan(&self, first_name: &str, last_name: &str) -> Result<ScanReport, ScanError> {
        self.scan_with_cancel(first_name, last_name, &CancellationToken::new())
            .await
    }

    /// Like [`Scanner::scan`], but stops with [`ScanError::Cancelled`] once
    /// `cancel` fires. Cancellation is checked before each query and raced
    /// against the in-flight request; no partial report is produced.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidInput`] for blank names and
    /// [`ScanError::Cancelled`] on cancellation.
    pub async fn scan_with_cancel(
        &self,
        first_name: &str,
        last_name: &str,
        cancel: &CancellationToken,
    ) -> Result<ScanReport, ScanError> {
        let name = full_name(first_name, last_name)?;
        let queries = plan_queries(first_name, last_name)?;
        tracing::info!(queries = queries.len(), "starting deepfake scan");

        let mut results: Vec<ScoredResult> = Vec::new();
        let mut seen = SeenLinks::default();
        let mut failed_queries = 0usize;

        for (index, query) in queries.iter().enumerate() {
            let position = index + 1;
            if cancel.is_cancelled() {
                tracing::info!(completed = index, "scan cancelled between queries");
                return Err(ScanError::Cancelled);
            }

            tracing::trace!(query = %query, "searching");
            let outcome = tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    tracing::info!(completed = index, "scan cancelled during request");
                    return Err(ScanError::Cancelled);
                }
                outcome = self.client.search(query, self.config.results_per_query) => outcome,
            };

            let candidates = match outcome {
                Ok(body) => self.extractor.extract(&body),
                Err(err) if err.is_provider_failure() => {
                    tracing::warn!(query = position, error = %err, "query failed, continuing");
                    failed_queries += 1;
                    continue;
                }
                Err(err) => return Err(err),
            };

            let before = results.len();
            for candidate in candidates {
                if self.config.dedup_by_link && !seen.insert(&candidate.link) {
                    tracing::trace!(link = %candidate.link, "duplicate link skipped");
                    continue;
                }
                let relevance = self.scorer.score(&candidate.scoring_text());
                if relevance.is_related {
                    tracing::debug!(
                        confidence = relevance.confidence,
                        "potential deepfake content"
                    );
                }
                results.push(ScoredResult::new(candidate, relevance, query));
            }
            let scored = results.len() - before;
            tracing::debug!(query = position, count = scored, "query results scored");
        }

        let report = ScanReport::from_results(name, results, Utc::now());
        tracing::info!(
            status = %report.status,
            total = report.total_results,
            related = report.related_count,
            failed_queries,
            "deepfake scan complete"
        );
        Ok(report)
    }
}
