// Common types and utilities shared across the application

pub mod session;
pub mod utils;

pub use session::{Notice, Session, UploadedAsset};
