//! Hugging Face inference client (text-to-image).

use bytes::Bytes;
use reqwest::{header, Client};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{AiError, Result};

const BASE_URL: &str = "https://router.huggingface.co/hf-inference";

/// Default image model.
pub const FLUX_1_SCHNELL: &str = "black-forest-labs/FLUX.1-schnell";

/// Raw image returned by the provider.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub bytes: Bytes,
    pub content_type: String,
}

#[derive(Debug, Serialize)]
struct TextToImageRequest<'a> {
    inputs: &'a str,
}

#[derive(Clone)]
pub struct HuggingFaceClient {
    http_client: Client,
    token: String,
    base_url: String,
    model: String,
}

impl HuggingFaceClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            token: token.into(),
            base_url: BASE_URL.to_string(),
            model: FLUX_1_SCHNELL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = client;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Render `prompt` to an image.
    pub async fn text_to_image(&self, prompt: &str) -> Result<GeneratedImage> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/models/{}", self.base_url, self.model))
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "image/png")
            .json(&TextToImageRequest { inputs: prompt })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, model = %self.model, "Hugging Face request failed");
                AiError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Hugging Face API error");
            return Err(AiError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
            .unwrap_or_else(|| "image/png".to_string());

        if !content_type.starts_with("image/") {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Parse(format!(
                "expected image, got {}: {}",
                content_type, body
            )));
        }

        let bytes = response.bytes().await.map_err(AiError::from)?;
        if bytes.is_empty() {
            return Err(AiError::EmptyResponse);
        }

        debug!(
            model = %self.model,
            duration_ms = start.elapsed().as_millis(),
            bytes = bytes.len(),
            content_type = %content_type,
            "Hugging Face image generated"
        );

        Ok(GeneratedImage {
            bytes,
            content_type,
        })
    }
}
