//! Error types for the site scorer.
//!
//! The analysis pipeline itself never fails: transport and markup problems are
//! folded into the report. These errors cover the edges around it:
//! - `AppError`: configuration, client construction and output failures
//! - `Result<T>`: Type alias for Results using AppError

use thiserror::Error;

// ============================================================================
// DOMAIN ERROR TYPE
// ============================================================================

/// Errors raised outside the analysis pipeline.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file is well-formed but semantically invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Generic error with context
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an HTTP client error
    pub fn http_client(msg: impl Into<String>) -> Self {
        Self::HttpClient(msg.into())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
