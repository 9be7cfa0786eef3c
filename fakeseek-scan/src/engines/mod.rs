//! Search provider implementations.
//!
//! Each module provides a struct implementing [`crate::client::SearchClient`]
//! that fetches a provider's HTML results page.

pub mod google;

pub use google::GoogleClient;
