//! FakeSeek: checks public search results for deepfake coverage of a person.
//!
//! The scan pipeline lives in the `fakeseek-scan` workspace crate. This crate
//! adds what the `fakeseek` binary needs around it:
//! - **Config**: TOML application settings wrapping [`fakeseek_scan::ScanConfig`]
//! - **Output**: JSON or plain-text rendering of a [`fakeseek_scan::ScanReport`]
//! - **Errors**: one [`AppError`] covering config, I/O, scan and output failures

pub mod config;
pub mod error;
pub mod output;

pub use config::{AppConfig, OutputConfig, OutputFormat};
pub use error::{AppError, Result};

/// Names scanned when the binary is run without arguments.
pub const DEMO_NAMES: [(&str, &str); 2] = [("John", "Doe"), ("Taylor", "Swift")];
