// Business domains
pub mod auth;
pub mod generation;
pub mod publishing;
