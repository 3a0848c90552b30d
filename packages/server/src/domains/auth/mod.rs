//! Auth domain - LinkedIn sign-in via OAuth 2.0 authorization code flow
//!
//! Responsibilities:
//! - Building the authorization URL with a per-session `state`
//! - Exchanging the returned code for a bearer token
//! - Surfacing every failure as an explicit error (never a silent no-op)
//!
//! Tokens are not refreshed; one token lives as long as its session.

pub mod actions;
pub mod errors;

pub use actions::{begin_login, complete_login, CallbackParams, LoginOutcome};
pub use errors::AuthorizationError;
