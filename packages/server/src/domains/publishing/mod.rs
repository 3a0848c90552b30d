//! Publishing domain - shares the session's content on the member's feed
//!
//! Flow: user info → (register + upload image, unless already uploaded for
//! this exact content) → create UGC post.

pub mod actions;
pub mod errors;
pub mod models;

pub use actions::{publish, PublishOutcome};
pub use errors::PublishError;
pub use models::{MediaAsset, Post};
