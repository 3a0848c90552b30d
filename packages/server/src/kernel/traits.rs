// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Prompt wording and retry decisions live in the generation domain.
//
// Naming convention: Base* for trait names (e.g., BaseTextGenerator)

use ai_client::{GeneratedImage, Result};
use async_trait::async_trait;

// =============================================================================
// Text generation (prompt in, text out)
// =============================================================================

#[async_trait]
pub trait BaseTextGenerator: Send + Sync {
    /// Single completion; the provider's text is returned verbatim.
    async fn generate_text(&self, prompt: &str, temperature: f32) -> Result<String>;
}

// =============================================================================
// Image generation (prompt in, image bytes out)
// =============================================================================

#[async_trait]
pub trait BaseImageGenerator: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage>;
}
