//! Server dependencies for domain actions (using traits for testability)
//!
//! Generation providers sit behind traits so tests can count and script
//! calls. The LinkedIn client is concrete; tests point it at a local stub.

use ai_client::{GeminiClient, GeneratedImage, HuggingFaceClient};
use async_trait::async_trait;
use linkedin_client::LinkedInClient;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domains::generation::RetryPolicy;
use crate::kernel::{BaseImageGenerator, BaseTextGenerator};

// =============================================================================
// Provider adapters
// =============================================================================

/// Wrapper around GeminiClient that implements BaseTextGenerator
pub struct GeminiAdapter(pub GeminiClient);

#[async_trait]
impl BaseTextGenerator for GeminiAdapter {
    async fn generate_text(&self, prompt: &str, temperature: f32) -> ai_client::Result<String> {
        self.0.generate_text(prompt, temperature).await
    }
}

/// Wrapper around HuggingFaceClient that implements BaseImageGenerator
pub struct HuggingFaceAdapter(pub HuggingFaceClient);

#[async_trait]
impl BaseImageGenerator for HuggingFaceAdapter {
    async fn generate_image(&self, prompt: &str) -> ai_client::Result<GeneratedImage> {
        self.0.text_to_image(prompt).await
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

#[derive(Clone)]
pub struct ServerDeps {
    pub linkedin: Arc<LinkedInClient>,
    pub text_generator: Arc<dyn BaseTextGenerator>,
    pub image_generator: Arc<dyn BaseImageGenerator>,
    /// Where generated images are written.
    pub image_dir: PathBuf,
    pub image_retry: RetryPolicy,
}

impl ServerDeps {
    pub fn new(
        linkedin: Arc<LinkedInClient>,
        text_generator: Arc<dyn BaseTextGenerator>,
        image_generator: Arc<dyn BaseImageGenerator>,
        image_dir: PathBuf,
        image_retry: RetryPolicy,
    ) -> Self {
        Self {
            linkedin,
            text_generator,
            image_generator,
            image_dir,
            image_retry,
        }
    }
}
