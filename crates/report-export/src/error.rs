//! Error types for export operations.

use thiserror::Error;

/// Errors that can occur while producing or reading export text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// JSON serialization or parsing failed.
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing a CSV record failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the CSV writer failed.
    #[error("CSV flush failed: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output was not valid UTF-8.
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
