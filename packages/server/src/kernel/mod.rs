//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

/// Sampling temperature for post text.
pub const TEXT_TEMPERATURE: f32 = 0.7;

pub use deps::{GeminiAdapter, HuggingFaceAdapter, ServerDeps};
pub use test_dependencies::{MockImageGenerator, MockTextGenerator};
pub use traits::*;
