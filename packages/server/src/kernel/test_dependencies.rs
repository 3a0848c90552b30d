// Mock implementations for testing
//
// Scripted generators that record every prompt and replay queued results.

use ai_client::{AiError, GeneratedImage, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{BaseImageGenerator, BaseTextGenerator};

/// PNG signature followed by filler; enough for content sniffing.
pub fn png_bytes() -> Vec<u8> {
    b"\x89PNG\r\n\x1a\nmock-image".to_vec()
}

// =============================================================================
// Mock Text Generator
// =============================================================================

#[derive(Clone, Default)]
pub struct MockTextGenerator {
    responses: Arc<Mutex<VecDeque<Result<String>>>>,
    calls: Arc<Mutex<Vec<(String, f32)>>>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful completion
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queue a failure
    pub fn with_error(self, error: AiError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Prompts (and temperatures) sent so far
    pub fn calls(&self) -> Vec<(String, f32)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseTextGenerator for MockTextGenerator {
    async fn generate_text(&self, prompt: &str, temperature: f32) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), temperature));

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Mock LinkedIn post".to_string()))
    }
}

// =============================================================================
// Mock Image Generator
// =============================================================================

#[derive(Clone, Default)]
pub struct MockImageGenerator {
    responses: Arc<Mutex<VecDeque<Result<GeneratedImage>>>>,
    fallback_error: Arc<Mutex<Option<fn() -> AiError>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockImageGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a PNG response
    pub fn with_image(self) -> Self {
        self.with_image_bytes(png_bytes(), "image/png")
    }

    pub fn with_image_bytes(self, bytes: Vec<u8>, content_type: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(GeneratedImage {
            bytes: bytes.into(),
            content_type: content_type.to_string(),
        }));
        self
    }

    /// Queue a failure
    pub fn with_error(self, error: AiError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Fail every call once the queue is drained
    pub fn always_failing(self, error: fn() -> AiError) -> Self {
        *self.fallback_error.lock().unwrap() = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseImageGenerator for MockImageGenerator {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage> {
        self.calls.lock().unwrap().push(prompt.to_string());

        if let Some(next) = self.responses.lock().unwrap().pop_front() {
            return next;
        }
        if let Some(make_error) = *self.fallback_error.lock().unwrap() {
            return Err(make_error());
        }
        Ok(GeneratedImage {
            bytes: png_bytes().into(),
            content_type: "image/png".to_string(),
        })
    }
}

/// 503 from the provider (transient)
pub fn service_unavailable() -> AiError {
    AiError::Api {
        status: 503,
        message: "Model is currently loading".to_string(),
    }
}

/// Connection reset before any response (transient)
pub fn connection_reset() -> AiError {
    AiError::Network {
        message: "connection reset by peer".to_string(),
        timeout: false,
        connect: true,
    }
}

/// 401 from the provider (permanent)
pub fn unauthorized() -> AiError {
    AiError::Api {
        status: 401,
        message: "Invalid credentials in Authorization header".to_string(),
    }
}
