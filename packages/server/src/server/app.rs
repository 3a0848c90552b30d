//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::auth::SessionStore;
use crate::server::middleware::{session_layer, session_middleware};
use crate::server::routes::{
    action_handler, health_handler, image_handler, index_handler, login_handler, logout_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
    pub sessions: Arc<SessionStore>,
    /// Mark the session cookie `Secure` (the app is served over HTTPS).
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(deps: Arc<ServerDeps>, sessions: Arc<SessionStore>, secure_cookies: bool) -> Self {
        Self {
            deps,
            sessions,
            secure_cookies,
        }
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    let sessions = session_layer(state.secure_cookies, state.sessions.ttl_hours());

    Router::new()
        // Page, OAuth redirect target and button presses
        .route("/", get(index_handler))
        .route("/login", get(login_handler))
        .route("/logout", post(logout_handler))
        .route("/action", post(action_handler))
        .route("/image", get(image_handler))
        // Composer session lookup only for the routes above
        .route_layer(middleware::from_fn(session_middleware))
        // Health check (no session)
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(sessions)
        .layer(Extension(state)) // Add shared state (must be after middlewares that need it)
        .layer(TraceLayer::new_for_http())
}
