//! Error types for the generation clients.

use thiserror::Error;

/// Result type for generation client operations.
pub type Result<T> = std::result::Result<T, AiError>;

#[derive(Debug, Error)]
pub enum AiError {
    /// Request never produced a response (connect failure, timeout, reset)
    #[error("network error: {message}")]
    Network {
        message: String,
        timeout: bool,
        connect: bool,
    },

    /// Provider answered with a non-success status
    #[error("provider error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded
    #[error("parse error: {0}")]
    Parse(String),

    /// Provider answered successfully but produced nothing usable
    #[error("provider returned an empty response")]
    EmptyResponse,
}

impl AiError {
    /// Worth retrying: timeouts, connection failures and 5xx responses.
    ///
    /// Client errors (4xx), parse failures and empty responses are not.
    pub fn is_transient(&self) -> bool {
        match self {
            AiError::Network {
                timeout, connect, ..
            } => *timeout || *connect,
            AiError::Api { status, .. } => (500..600).contains(status),
            AiError::Parse(_) | AiError::EmptyResponse => false,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return AiError::Api {
                status: status.as_u16(),
                message: e.to_string(),
            };
        }
        if e.is_decode() {
            return AiError::Parse(e.to_string());
        }
        AiError::Network {
            timeout: e.is_timeout(),
            // body/request errors without a status are mid-flight transport failures
            connect: e.is_connect() || e.is_request() || e.is_body(),
            message: e.to_string(),
        }
    }
}
