//! Error types for the catalog client.

use thiserror::Error;

/// Errors that can occur when fetching or mapping episodes.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// API is offline or unreachable
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// Invalid API base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse API response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Publication date in an unrecognised format
    #[error("Invalid publication date: {0}")]
    InvalidDate(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
