//! Request-level failures.
//!
//! Domain failures (generation, publishing, sign-in) are shown to the member
//! as flash notices on the page. `AppError` covers the requests that cannot
//! be answered with a page at all.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::domains::auth::AuthorizationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown button: {0}")]
    UnknownButton(String),

    #[error("No generated image")]
    ImageNotFound,

    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnknownButton(_) => StatusCode::BAD_REQUEST,
            AppError::ImageNotFound => StatusCode::NOT_FOUND,
            AppError::Authorization(_) | AppError::Session(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}
