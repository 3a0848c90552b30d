pub mod generate;

pub use generate::{generate, generate_into_session, remove_image, GeneratedContent};
