pub mod session;

pub use session::{SessionStore, SessionToken, SharedSession};
