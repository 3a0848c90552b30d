use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domains::generation::RetryPolicy;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub hf_api_key: String,
    pub image_model: String,
    pub linkedin_client_id: String,
    pub linkedin_client_secret: String,
    /// Public HTTPS URL registered with LinkedIn; the OAuth redirect lands on `/`.
    pub redirect_uri: String,
    pub image_dir: PathBuf,
    pub http_timeout: Duration,
    pub image_retry: RetryPolicy,
    pub session_ttl_hours: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: parse_or("PORT", 8080)?,
            gemini_api_key: env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set")?,
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| ai_client::gemini::GEMINI_2_5_FLASH.to_string()),
            hf_api_key: env::var("HF_API_KEY").context("HF_API_KEY must be set")?,
            image_model: env::var("HF_IMAGE_MODEL")
                .unwrap_or_else(|_| ai_client::huggingface::FLUX_1_SCHNELL.to_string()),
            linkedin_client_id: env::var("CLIENT_ID").context("CLIENT_ID must be set")?,
            linkedin_client_secret: env::var("CLIENT_SECRET")
                .context("CLIENT_SECRET must be set")?,
            redirect_uri: env::var("REDIRECT_URI").context("REDIRECT_URI must be set")?,
            image_dir: env::var("IMAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./generated")),
            http_timeout: Duration::from_secs(parse_or("HTTP_TIMEOUT_SECS", 120)?),
            image_retry: RetryPolicy {
                max_attempts: parse_or("IMAGE_RETRY_ATTEMPTS", 3)?,
                delay: Duration::from_secs(parse_or("IMAGE_RETRY_DELAY_SECS", 5)?),
            },
            session_ttl_hours: parse_or("SESSION_TTL_HOURS", 24)?,
        })
    }
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}
