use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::{
    cookie::{time::Duration, SameSite},
    Expiry, MemoryStore, Session as CookieSession, SessionManagerLayer,
};
use tracing::{debug, warn};

use crate::server::app::AppState;
use crate::server::auth::{SessionToken, SharedSession};
use crate::server::error::AppError;

pub const SESSION_COOKIE: &str = "poster_session";

/// Key under which the composer session token is kept in the cookie session
const SESSION_KEY: &str = "composer";

/// The browser's session, resolved for this request
#[derive(Clone)]
pub struct CurrentSession {
    pub token: SessionToken,
    pub session: SharedSession,
}

/// Cookie session layer
///
/// Nothing is stored (and no cookie is sent) until a handler inserts the
/// composer token, which only happens on `/login`.
pub fn session_layer(secure: bool, ttl_hours: i64) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(Duration::hours(ttl_hours)))
}

/// Middleware to resolve the browser's session
///
/// This middleware:
/// 1. Reads the composer token from the cookie session
/// 2. Looks it up in the SessionStore
/// 3. Stores CurrentSession in request extensions when found
///
/// Anonymous requests pass through without a CurrentSession.
pub async fn session_middleware(
    Extension(state): Extension<AppState>,
    cookie: CookieSession,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match cookie.get::<SessionToken>(SESSION_KEY).await {
        Ok(token) => token,
        Err(e) => return AppError::from(e).into_response(),
    };

    if let Some(token) = token {
        match state.sessions.get_session(&token).await {
            Some(session) => {
                request
                    .extensions_mut()
                    .insert(CurrentSession { token, session });
            }
            None => debug!("Session expired or unknown"),
        }
    }

    next.run(request).await
}

/// Start a composer session and bind it to the browser's cookie
pub async fn start_session(
    state: &AppState,
    cookie: &CookieSession,
) -> Result<CurrentSession, AppError> {
    let (token, session) = state.sessions.create_session().await;

    if let Err(e) = cookie.insert(SESSION_KEY, &token).await {
        warn!(error = %e, "Failed to bind session to cookie");
        state.sessions.delete_session(&token).await;
        return Err(e.into());
    }

    debug!("Started new session");
    Ok(CurrentSession { token, session })
}

/// Tear the composer session down and expire the cookie
pub async fn end_session(
    state: &AppState,
    cookie: &CookieSession,
    current: Option<CurrentSession>,
) -> Result<(), AppError> {
    if let Some(current) = current {
        state.sessions.delete_session(&current.token).await;
    }
    cookie.flush().await?;
    Ok(())
}
