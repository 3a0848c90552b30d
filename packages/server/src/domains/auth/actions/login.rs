//! Login actions - authorization URL and code exchange.

use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::common::Session;
use crate::domains::auth::errors::AuthorizationError;
use crate::kernel::ServerDeps;

/// Query parameters LinkedIn appends to the redirect URI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl CallbackParams {
    /// Whether this request is an OAuth redirect at all.
    pub fn is_callback(&self) -> bool {
        self.code.is_some() || self.error.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    SignedIn,
    /// Session was already signed in; the redirect was ignored.
    AlreadySignedIn,
}

/// Build the authorization URL and remember its `state` in the session.
pub fn begin_login(deps: &ServerDeps, session: &mut Session) -> Result<String, AuthorizationError> {
    let state = Uuid::new_v4().simple().to_string();
    let url = deps
        .linkedin
        .authorization_url(&state)
        .map_err(AuthorizationError::Config)?;
    session.oauth_state = Some(state);
    Ok(url)
}

/// Handle the OAuth redirect: check `state`, exchange the code, sign in.
///
/// On any failure the session stays signed out.
pub async fn complete_login(
    deps: &ServerDeps,
    session: &mut Session,
    params: &CallbackParams,
) -> Result<LoginOutcome, AuthorizationError> {
    if session.authenticated {
        return Ok(LoginOutcome::AlreadySignedIn);
    }

    if let Some(error) = &params.error {
        session.oauth_state = None;
        let reason = params
            .error_description
            .clone()
            .unwrap_or_else(|| error.clone());
        warn!(error = %error, "Authorization denied by provider");
        return Err(AuthorizationError::Denied(reason));
    }

    let expected = session.oauth_state.take();
    match (&expected, &params.state) {
        (Some(expected), Some(got)) if expected == got => {}
        _ => {
            warn!("OAuth state mismatch");
            return Err(AuthorizationError::StateMismatch);
        }
    }

    let code = params
        .code
        .as_deref()
        .filter(|c| !c.is_empty())
        .ok_or(AuthorizationError::MissingCode)?;

    let token = deps.linkedin.exchange_code(code).await.map_err(|e| {
        warn!(status = ?e.status(), "Token exchange failed");
        AuthorizationError::TokenExchange(e)
    })?;

    session.sign_in(token.access_token);
    info!(expires_in = ?token.expires_in, "LinkedIn authorization successful");
    Ok(LoginOutcome::SignedIn)
}
