//! Generation provider clients.
//!
//! Thin REST clients with no domain logic:
//! - [`gemini::GeminiClient`] for prompt-in/text-out completions
//! - [`huggingface::HuggingFaceClient`] for prompt-in/image-out generation
//!
//! # Example
//!
//! ```rust,ignore
//! use ai_client::{GeminiClient, HuggingFaceClient};
//!
//! let text = GeminiClient::new(gemini_key)
//!     .generate_text("Write a haiku about Rust", 0.7)
//!     .await?;
//!
//! let image = HuggingFaceClient::new(hf_token)
//!     .text_to_image("A crab holding a wrench")
//!     .await?;
//! std::fs::write("crab.png", &image.bytes)?;
//! ```

pub mod error;
pub mod gemini;
pub mod huggingface;

pub use error::{AiError, Result};
pub use gemini::GeminiClient;
pub use huggingface::{GeneratedImage, HuggingFaceClient};
