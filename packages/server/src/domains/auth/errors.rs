use linkedin_client::LinkedInError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthorizationError {
    /// LinkedIn redirected back with `?error=...` (e.g. the member declined)
    #[error("LinkedIn authorization was denied: {0}")]
    Denied(String),

    /// Redirect carried a `state` we did not hand out
    #[error("LinkedIn authorization failed: the sign-in link expired or was not issued by this session, please try again")]
    StateMismatch,

    #[error("LinkedIn authorization failed: redirect carried no authorization code")]
    MissingCode,

    #[error("LinkedIn authorization failed: {0}")]
    TokenExchange(#[source] LinkedInError),

    #[error("LinkedIn authorization URL is misconfigured: {0}")]
    Config(#[source] LinkedInError),
}

impl AuthorizationError {
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            AuthorizationError::TokenExchange(e) => e.status(),
            _ => None,
        }
    }
}
