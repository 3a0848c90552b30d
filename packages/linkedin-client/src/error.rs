//! Error types for the LinkedIn client.

use thiserror::Error;

/// Result type for LinkedIn client operations.
pub type Result<T> = std::result::Result<T, LinkedInError>;

/// LinkedIn client errors.
#[derive(Debug, Error)]
pub enum LinkedInError {
    /// Transport failure (DNS, connect, timeout, TLS)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success status returned by LinkedIn
    #[error("LinkedIn API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("failed to parse LinkedIn response: {0}")]
    Parse(String),

    /// A required field was absent from an otherwise valid response
    #[error("LinkedIn response is missing `{0}`")]
    MissingField(&'static str),

    /// Invalid endpoint configuration
    #[error("invalid LinkedIn endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl LinkedInError {
    /// Upstream HTTP status, when the error came from a LinkedIn response.
    pub fn status(&self) -> Option<u16> {
        match self {
            LinkedInError::Api { status, .. } => Some(*status),
            LinkedInError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
