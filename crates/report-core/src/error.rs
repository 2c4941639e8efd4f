//! Error types for the report service

use thiserror::Error;

/// Main error type for all report operations
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
