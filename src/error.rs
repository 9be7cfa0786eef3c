//! Error types for the fakeseek application layer.

use fakeseek_scan::ScanError;

/// Top-level error type for the fakeseek binary and library.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration file could not be parsed or serialised.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The scan itself failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A report could not be rendered.
    #[error("output error: {0}")]
    Output(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
