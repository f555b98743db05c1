//! Error types for the TriCovid core library.

use thiserror::Error;

/// Core error type for API access.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for TriCovid operations.
pub type Result<T> = std::result::Result<T, TrackerError>;
