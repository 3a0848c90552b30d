use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    sessions: usize,
    image_dir: ImageDirHealth,
}

#[derive(Serialize)]
pub struct ImageDirHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Checks:
/// - Image directory is present
/// - Number of live sessions
///
/// Returns 200 OK if all systems are healthy, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let image_dir = match tokio::fs::metadata(&state.deps.image_dir).await {
        Ok(meta) if meta.is_dir() => ImageDirHealth {
            status: "ok".to_string(),
            error: None,
        },
        Ok(_) => ImageDirHealth {
            status: "error".to_string(),
            error: Some("Not a directory".to_string()),
        },
        Err(e) => ImageDirHealth {
            status: "error".to_string(),
            error: Some(e.to_string()),
        },
    };

    let is_healthy = image_dir.status == "ok";

    let (status_code, overall_status) = if is_healthy {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        status_code,
        Json(HealthResponse {
            status: overall_status.to_string(),
            sessions: state.sessions.len().await,
            image_dir,
        }),
    )
}
