// HTTP server setup (Axum, server-rendered pages)
pub mod app;
pub mod auth;
pub mod error;
pub mod events;
pub mod middleware;
pub mod pages;
pub mod routes;

pub use app::*;
pub use error::AppError;
