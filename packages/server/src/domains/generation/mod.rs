//! Generation domain - turns a topic into post text plus an illustration
//!
//! Responsibilities:
//! - Prompt wording for both providers
//! - Transient-only retry around the image provider
//! - Writing the image to disk and updating the session all-or-nothing

pub mod actions;
pub mod errors;
pub mod prompts;
pub mod retry;

pub use actions::{generate, generate_into_session, GeneratedContent};
pub use errors::GenerationError;
pub use retry::{retry_transient, ErrorKind, RetryFailure, RetryPolicy};
