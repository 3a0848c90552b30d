//! Per-browser session state.
//!
//! A `Session` is created empty when a visitor first arrives and is mutated
//! in place by the auth, generation and publishing actions. Nothing here is
//! persisted.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Asset already uploaded for a specific piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    pub content_fingerprint: String,
    pub owner_urn: String,
    pub asset: String,
}

/// One-shot message shown on the next page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct Session {
    pub authenticated: bool,
    pub bearer_token: Option<String>,
    pub generated_text: Option<String>,
    pub generated_image_path: Option<PathBuf>,
    /// CSRF `state` handed to the authorization URL, awaiting the redirect.
    pub oauth_state: Option<String>,
    pub uploaded_asset: Option<UploadedAsset>,
    /// Fingerprint of the last content posted successfully.
    pub published_fingerprint: Option<String>,
    pub notice: Option<Notice>,
    pub created_at: DateTime<Utc>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            authenticated: false,
            bearer_token: None,
            generated_text: None,
            generated_image_path: None,
            oauth_state: None,
            uploaded_asset: None,
            published_fingerprint: None,
            notice: None,
            created_at: Utc::now(),
        }
    }

    pub fn has_content(&self) -> bool {
        let has_text = self
            .generated_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        let has_image = self
            .generated_image_path
            .as_ref()
            .is_some_and(|p| !p.as_os_str().is_empty());
        has_text && has_image
    }

    /// Bearer token, only while authenticated.
    pub fn token(&self) -> Option<&str> {
        if self.authenticated {
            self.bearer_token.as_deref()
        } else {
            None
        }
    }

    /// Publishing needs a token and both halves of the content.
    pub fn can_publish(&self) -> bool {
        self.token().is_some() && self.has_content()
    }

    pub fn sign_in(&mut self, token: String) {
        self.authenticated = true;
        self.bearer_token = Some(token);
        self.oauth_state = None;
    }

    /// Replace the content as a unit. Returns the previous image path so the
    /// caller can remove the stale file.
    pub fn set_content(&mut self, text: String, image_path: PathBuf) -> Option<PathBuf> {
        self.generated_text = Some(text);
        self.uploaded_asset = None;
        self.generated_image_path.replace(image_path)
    }

    pub fn clear_content(&mut self) -> Option<PathBuf> {
        self.generated_text = None;
        self.uploaded_asset = None;
        self.generated_image_path.take()
    }

    pub fn flash_success(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Success(message.into()));
    }

    pub fn flash_error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Error(message.into()));
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
