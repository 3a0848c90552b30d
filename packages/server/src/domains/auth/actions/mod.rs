pub mod login;

pub use login::{begin_login, complete_login, CallbackParams, LoginOutcome};
