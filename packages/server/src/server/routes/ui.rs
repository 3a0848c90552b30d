use axum::{
    extract::{Extension, Form, Query},
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        StatusCode,
    },
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session as CookieSession;
use tracing::{info, warn};

use crate::common::{Notice, Session};
use crate::domains::auth::{begin_login, complete_login, CallbackParams, LoginOutcome};
use crate::server::app::AppState;
use crate::server::error::AppError;
use crate::server::events::{dispatch, ActionForm, UiEvent, SIGN_IN_FIRST_MESSAGE};
use crate::server::middleware::{end_session, start_session, CurrentSession};
use crate::server::pages::index_page;

pub const SIGNED_IN_MESSAGE: &str = "LinkedIn authorization successful!";

/// Index page
///
/// Also the OAuth redirect target: `?code=&state=` or `?error=` requests
/// complete the sign-in, flash the outcome and redirect to a clean `/`.
pub async fn index_handler(
    Extension(state): Extension<AppState>,
    current: Option<Extension<CurrentSession>>,
    Query(params): Query<CallbackParams>,
) -> Response {
    let Some(Extension(current)) = current else {
        return anonymous_index(&state, &params).await;
    };
    let mut session = current.session.lock().await;

    if params.is_callback() {
        match complete_login(&state.deps, &mut session, &params).await {
            Ok(LoginOutcome::SignedIn) => session.flash_success(SIGNED_IN_MESSAGE),
            Ok(LoginOutcome::AlreadySignedIn) => {}
            Err(e) => {
                warn!(status = ?e.upstream_status(), error = %e, "Sign-in failed");
                session.flash_error(e.to_string());
            }
        }
        return Redirect::to("/").into_response();
    }

    let notice = session.take_notice();
    Html(index_page(&session, notice.as_ref(), &image_version(&session))).into_response()
}

/// Index page for a browser without a session
///
/// Nothing is stored, so a callback that cannot belong to this browser is
/// answered with the page and its error directly.
async fn anonymous_index(state: &AppState, params: &CallbackParams) -> Response {
    let mut session = Session::new();
    if !params.is_callback() {
        return Html(index_page(&session, None, "")).into_response();
    }

    let notice = match complete_login(&state.deps, &mut session, params).await {
        Ok(_) => None,
        Err(e) => {
            warn!(status = ?e.upstream_status(), error = %e, "Sign-in failed");
            Some(Notice::Error(e.to_string()))
        }
    };
    Html(index_page(&session, notice.as_ref(), "")).into_response()
}

/// Redirect to LinkedIn's consent screen
///
/// The composer session starts here.
pub async fn login_handler(
    Extension(state): Extension<AppState>,
    cookie: CookieSession,
    current: Option<Extension<CurrentSession>>,
) -> Result<Redirect, AppError> {
    let current = match current {
        Some(Extension(current)) => current,
        None => start_session(&state, &cookie).await?,
    };

    let mut session = current.session.lock().await;
    if session.authenticated {
        return Ok(Redirect::to("/"));
    }

    let url = begin_login(&state.deps, &mut session)?;
    Ok(Redirect::to(&url))
}

/// Tear the session down and drop the cookie
pub async fn logout_handler(
    Extension(state): Extension<AppState>,
    cookie: CookieSession,
    current: Option<Extension<CurrentSession>>,
) -> Result<Redirect, AppError> {
    end_session(&state, &cookie, current.map(|Extension(c)| c)).await?;
    info!("Signed out");

    Ok(Redirect::to("/"))
}

/// Button presses (post/redirect/get)
///
/// The session stays locked for the whole action, so presses from the same
/// browser run one at a time. Without a session there is nothing to flash
/// into, so the page is returned directly as 401.
pub async fn action_handler(
    Extension(state): Extension<AppState>,
    current: Option<Extension<CurrentSession>>,
    Form(form): Form<ActionForm>,
) -> Result<Response, AppError> {
    let event = UiEvent::try_from(form)?;

    let Some(Extension(current)) = current else {
        let notice = Notice::Error(SIGN_IN_FIRST_MESSAGE.to_string());
        let page = index_page(&Session::new(), Some(&notice), "");
        return Ok((StatusCode::UNAUTHORIZED, Html(page)).into_response());
    };

    let mut session = current.session.lock().await;
    dispatch(&state.deps, &current.token, &mut session, event).await;

    Ok(Redirect::to("/").into_response())
}

/// Serve the session's generated image
pub async fn image_handler(
    current: Option<Extension<CurrentSession>>,
) -> Result<Response, AppError> {
    let Some(Extension(current)) = current else {
        return Err(AppError::ImageNotFound);
    };
    let path = current
        .session
        .lock()
        .await
        .generated_image_path
        .clone()
        .ok_or(AppError::ImageNotFound)?;

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(AppError::ImageNotFound),
        Err(e) => return Err(AppError::Internal(format!("reading image: {}", e))),
    };
    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    Ok((
        [
            (CONTENT_TYPE, mime.to_string()),
            (CACHE_CONTROL, "no-store".to_string()),
        ],
        bytes,
    )
        .into_response())
}

/// Changes whenever a new image is generated
fn image_version(session: &Session) -> String {
    session
        .generated_image_path
        .as_ref()
        .and_then(|path| path.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
