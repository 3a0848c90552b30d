// AI LinkedIn Post Composer - Core
//
// Signs a member in with LinkedIn, drafts a post (text + illustration) with
// external generation providers, previews it, and publishes it to the feed.
//
// Domain actions live in domains/*/actions/ and operate on an explicit
// per-browser Session passed in by the HTTP layer.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
