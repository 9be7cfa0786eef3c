//! Trait definition for the search-provider boundary.
//!
//! The scanner only depends on [`SearchClient`]. Production code uses
//! [`crate::engines::GoogleClient`]; tests supply fixture implementations that
//! return canned markup or failures.

use std::sync::Arc;

use crate::error::ScanError;

/// A search provider that returns raw result-page content for a query.
///
/// Implementors own their politeness throttling and timeouts. Failures are
/// reported as [`ScanError::Network`], [`ScanError::Timeout`] or
/// [`ScanError::HttpStatus`]; the scanner treats each of these as zero
/// candidates for that query.
///
/// All implementations must be `Send + Sync` so a client can be shared
/// across scans running on different tasks.
pub trait SearchClient: Send + Sync {
    /// Fetch the raw response body for `query`, asking for up to `limit`
    /// results.
    ///
    /// # Errors
    ///
    /// Returns a provider failure if the request cannot be completed, times
    /// out, or is answered with a non-success status.
    fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<String, ScanError>> + Send;
}

impl<C: SearchClient> SearchClient for Arc<C> {
    fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<String, ScanError>> + Send {
        (**self).search(query, limit)
    }
}
