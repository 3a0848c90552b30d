//! Pure LinkedIn API client.
//!
//! Covers the three-legged OAuth flow (authorization URL + code exchange) and
//! the calls needed to share an image post on a member's feed: user info,
//! asset registration, byte upload and UGC post creation.
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_client::{LinkedInClient, LinkedInOptions, UgcPost, Visibility};
//!
//! let client = LinkedInClient::new(LinkedInOptions::new(id, secret, redirect));
//! let token = client.exchange_code(&code).await?.access_token;
//!
//! let me = client.userinfo(&token).await?;
//! let owner = LinkedInClient::person_urn(&me.sub);
//! let upload = client.register_image_upload(&token, &owner).await?;
//! client.upload_image(&token, &upload.upload_url, bytes).await?;
//! client
//!     .create_ugc_post(&token, &UgcPost::image_share(&owner, text, &upload.asset, Visibility::Public))
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{LinkedInError, Result};
pub use types::{
    AccessToken, CreatedPost, UgcPost, UploadRegistration, UserInfo, Visibility,
    FEEDSHARE_IMAGE_RECIPE,
};

use reqwest::{header, Client, Response, StatusCode};
use tracing::{debug, warn};
use types::{RegisterUploadBody, RegisterUploadResponse};
use url::Url;

const AUTH_URL: &str = "https://www.linkedin.com/oauth/v2/authorization";
const TOKEN_URL: &str = "https://www.linkedin.com/oauth/v2/accessToken";
const API_BASE_URL: &str = "https://api.linkedin.com";

/// Scopes needed to read the member id and post on their behalf.
pub const SCOPES: &str = "openid profile w_member_social";

const RESTLI_PROTOCOL_VERSION: &str = "X-Restli-Protocol-Version";

#[derive(Debug, Clone)]
pub struct LinkedInOptions {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_base_url: String,
}

impl LinkedInOptions {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            auth_url: AUTH_URL.to_string(),
            token_url: TOKEN_URL.to_string(),
            api_base_url: API_BASE_URL.to_string(),
        }
    }

    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Debug, Clone)]
pub struct LinkedInClient {
    client: Client,
    options: LinkedInOptions,
}

impl LinkedInClient {
    pub fn new(options: LinkedInOptions) -> Self {
        Self::with_http_client(options, Client::new())
    }

    /// Use a preconfigured HTTP client (timeouts, proxies).
    pub fn with_http_client(options: LinkedInOptions, client: Client) -> Self {
        Self { client, options }
    }

    pub fn options(&self) -> &LinkedInOptions {
        &self.options
    }

    /// URL the member visits to grant access. `state` comes back on the redirect.
    pub fn authorization_url(&self, state: &str) -> Result<String> {
        let url = Url::parse_with_params(
            &self.options.auth_url,
            &[
                ("response_type", "code"),
                ("client_id", self.options.client_id.as_str()),
                ("redirect_uri", self.options.redirect_uri.as_str()),
                ("scope", SCOPES),
                ("state", state),
            ],
        )?;
        Ok(url.into())
    }

    /// Exchange an authorization code for a bearer token.
    ///
    /// Only HTTP 200 counts as success.
    pub async fn exchange_code(&self, code: &str) -> Result<AccessToken> {
        let form = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.options.redirect_uri.as_str()),
            ("client_id", self.options.client_id.as_str()),
            ("client_secret", self.options.client_secret.as_str()),
        ];

        debug!(token_url = %self.options.token_url, "Exchanging authorization code");
        let resp = self
            .client
            .post(&self.options.token_url)
            .form(&form)
            .send()
            .await?;

        let resp = expect_status(resp, StatusCode::OK, "token exchange").await?;
        let body: serde_json::Value = resp.json().await?;
        if body.get("access_token").and_then(|t| t.as_str()).is_none() {
            return Err(LinkedInError::MissingField("access_token"));
        }
        serde_json::from_value(body).map_err(|e| LinkedInError::Parse(e.to_string()))
    }

    /// Fetch the authenticated member's OpenID profile.
    pub async fn userinfo(&self, token: &str) -> Result<UserInfo> {
        let url = format!("{}/v2/userinfo", self.options.api_base_url);
        debug!(url = %url, "Fetching member info");
        let resp = self.client.get(&url).bearer_auth(token).send().await?;

        let resp = expect_success(resp, "userinfo").await?;
        resp.json::<UserInfo>()
            .await
            .map_err(|e| LinkedInError::Parse(e.to_string()))
    }

    /// Owner reference for a member subject identifier.
    pub fn person_urn(sub: &str) -> String {
        format!("urn:li:person:{}", sub)
    }

    /// Declare an image upload owned by `owner_urn`.
    pub async fn register_image_upload(
        &self,
        token: &str,
        owner_urn: &str,
    ) -> Result<UploadRegistration> {
        let url = format!(
            "{}/v2/assets?action=registerUpload",
            self.options.api_base_url
        );
        let body = RegisterUploadBody::feedshare_image(owner_urn);
        debug!(url = %url, "Registering image upload");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header(RESTLI_PROTOCOL_VERSION, "2.0.0")
            .json(&body)
            .send()
            .await?;

        let resp = expect_success(resp, "registerUpload").await?;
        let parsed: RegisterUploadResponse = resp
            .json()
            .await
            .map_err(|e| LinkedInError::Parse(e.to_string()))?;

        let registration = parsed
            .into_registration()
            .ok_or(LinkedInError::MissingField("uploadUrl/asset"))?;
        debug!(asset = %registration.asset, "Registered image upload");
        Ok(registration)
    }

    /// PUT the raw image bytes to the URL handed out by registration.
    pub async fn upload_image(&self, token: &str, upload_url: &str, bytes: Vec<u8>) -> Result<()> {
        let size = bytes.len();
        debug!(bytes = size, "Uploading image bytes");
        let resp = self
            .client
            .put(upload_url)
            .bearer_auth(token)
            .body(bytes)
            .send()
            .await?;

        expect_success(resp, "image upload").await?;
        Ok(())
    }

    /// Create a UGC post. Succeeds only on HTTP 201.
    pub async fn create_ugc_post(&self, token: &str, post: &UgcPost) -> Result<CreatedPost> {
        let url = format!("{}/v2/ugcPosts", self.options.api_base_url);
        debug!(url = %url, author = %post.author, "Creating post");
        let resp = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header(RESTLI_PROTOCOL_VERSION, "2.0.0")
            .json(post)
            .send()
            .await?;

        let resp = expect_status(resp, StatusCode::CREATED, "ugcPosts").await?;
        let header_id = resp
            .headers()
            .get("x-restli-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let id = match header_id {
            Some(id) => Some(id),
            None => resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("id").and_then(|id| id.as_str()).map(str::to_string)),
        };

        Ok(CreatedPost { id })
    }
}

async fn expect_status(resp: Response, expected: StatusCode, call: &str) -> Result<Response> {
    let status = resp.status();
    if status == expected {
        return Ok(resp);
    }
    Err(api_error(resp, call).await)
}

async fn expect_success(resp: Response, call: &str) -> Result<Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    Err(api_error(resp, call).await)
}

async fn api_error(resp: Response, call: &str) -> LinkedInError {
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = resp.text().await.unwrap_or_default();

    warn!(call, status = %status, content_type = %content_type, "LinkedIn API error");

    let message = if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string()
    } else {
        body
    };

    LinkedInError::Api {
        status: status.as_u16(),
        message,
    }
}
