//! Scan orchestration: sequential per-query fetch, extraction, scoring,
//! optional link deduplication, and report derivation.

pub mod dedup;
pub mod scan;
pub mod scoring;

pub use scan::Scanner;
pub use scoring::RelevanceScorer;
