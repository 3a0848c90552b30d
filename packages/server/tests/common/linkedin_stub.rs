//! In-process stand-in for the LinkedIn OAuth and REST endpoints.
//!
//! Binds to 127.0.0.1:0, records every request it receives and answers with
//! scripted statuses. The register response points the upload URL back at
//! the stub so the byte upload is observable too.

use axum::{
    body::Bytes,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

pub const TOKEN_PATH: &str = "/oauth/v2/accessToken";
pub const USERINFO_PATH: &str = "/v2/userinfo";
pub const REGISTER_PATH: &str = "/v2/assets";
pub const UPLOAD_PATH: &str = "/upload/U";
pub const UGC_POSTS_PATH: &str = "/v2/ugcPosts";

pub const ACCESS_TOKEN: &str = "X";
pub const MEMBER_SUB: &str = "123";
pub const ASSET: &str = "A";
pub const POST_ID: &str = "urn:li:share:1";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }

    pub fn form_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

struct StubState {
    base_url: String,
    token_status: Mutex<StatusCode>,
    omit_access_token: Mutex<bool>,
    userinfo_status: Mutex<StatusCode>,
    register_status: Mutex<StatusCode>,
    omit_upload_url: Mutex<bool>,
    upload_status: Mutex<StatusCode>,
    post_status: Mutex<StatusCode>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubState {
    fn record(&self, method: Method, uri: &Uri, headers: &HeaderMap, body: &Bytes) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            authorization: headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: body.to_vec(),
        });
    }
}

pub struct LinkedInStub {
    pub base_url: String,
    state: Arc<StubState>,
    handle: JoinHandle<()>,
}

impl LinkedInStub {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        let state = Arc::new(StubState {
            base_url: base_url.clone(),
            token_status: Mutex::new(StatusCode::OK),
            omit_access_token: Mutex::new(false),
            userinfo_status: Mutex::new(StatusCode::OK),
            register_status: Mutex::new(StatusCode::OK),
            omit_upload_url: Mutex::new(false),
            upload_status: Mutex::new(StatusCode::CREATED),
            post_status: Mutex::new(StatusCode::CREATED),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route(TOKEN_PATH, post(token_handler))
            .route(USERINFO_PATH, get(userinfo_handler))
            .route(REGISTER_PATH, post(register_handler))
            .route(UPLOAD_PATH, put(upload_handler))
            .route(UGC_POSTS_PATH, post(ugc_posts_handler))
            .with_state(state.clone());

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url,
            state,
            handle,
        })
    }

    pub fn token_url(&self) -> String {
        format!("{}{}", self.base_url, TOKEN_PATH)
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }

    pub fn set_token_status(&self, status: StatusCode) {
        *self.state.token_status.lock().unwrap() = status;
    }

    /// Answer the token exchange with 200 but no `access_token`
    pub fn omit_access_token(&self) {
        *self.state.omit_access_token.lock().unwrap() = true;
    }

    pub fn set_userinfo_status(&self, status: StatusCode) {
        *self.state.userinfo_status.lock().unwrap() = status;
    }

    pub fn set_register_status(&self, status: StatusCode) {
        *self.state.register_status.lock().unwrap() = status;
    }

    /// Answer registration with 200 but no upload mechanism
    pub fn omit_upload_url(&self) {
        *self.state.omit_upload_url.lock().unwrap() = true;
    }

    pub fn set_upload_status(&self, status: StatusCode) {
        *self.state.upload_status.lock().unwrap() = status;
    }

    pub fn set_post_status(&self, status: StatusCode) {
        *self.state.post_status.lock().unwrap() = status;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    pub fn count(&self, path: &str) -> usize {
        self.requests_to(path).len()
    }

    /// Paths hit so far, in order
    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }

    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

async fn token_handler(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.record(method, &uri, &headers, &body);

    let status = *state.token_status.lock().unwrap();
    if status == StatusCode::OK && *state.omit_access_token.lock().unwrap() {
        (status, Json(json!({ "expires_in": 5_184_000 }))).into_response()
    } else if status == StatusCode::OK {
        (
            status,
            Json(json!({
                "access_token": ACCESS_TOKEN,
                "expires_in": 5_184_000,
                "scope": "openid,profile,w_member_social"
            })),
        )
            .into_response()
    } else {
        (
            status,
            Json(json!({
                "error": "invalid_request",
                "error_description": "Unable to retrieve access token: authorization code not found"
            })),
        )
            .into_response()
    }
}

async fn userinfo_handler(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.record(method, &uri, &headers, &body);

    let status = *state.userinfo_status.lock().unwrap();
    if status == StatusCode::OK {
        Json(json!({ "sub": MEMBER_SUB, "name": "Test Member" })).into_response()
    } else {
        (
            status,
            Json(json!({ "serviceErrorCode": 65600, "message": "Invalid access token", "status": status.as_u16() })),
        )
            .into_response()
    }
}

async fn register_handler(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.record(method, &uri, &headers, &body);

    let status = *state.register_status.lock().unwrap();
    if status != StatusCode::OK {
        return (
            status,
            Json(json!({ "message": "Not enough permissions to access media", "status": status.as_u16() })),
        )
            .into_response();
    }
    if *state.omit_upload_url.lock().unwrap() {
        return Json(json!({ "value": { "asset": ASSET } })).into_response();
    }

    Json(json!({
        "value": {
            "uploadMechanism": {
                "com.linkedin.digitalmedia.uploading.MediaUploadHttpRequest": {
                    "uploadUrl": format!("{}{}", state.base_url, UPLOAD_PATH),
                    "headers": {}
                }
            },
            "asset": ASSET,
            "mediaArtifact": "urn:li:digitalmediaMediaArtifact:(A,feedshare-image)"
        }
    }))
    .into_response()
}

async fn upload_handler(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.record(method, &uri, &headers, &body);
    let status = *state.upload_status.lock().unwrap();
    status.into_response()
}

async fn ugc_posts_handler(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.record(method, &uri, &headers, &body);

    let status = *state.post_status.lock().unwrap();
    if status == StatusCode::CREATED {
        (status, [("x-restli-id", POST_ID)], Json(json!({ "id": POST_ID }))).into_response()
    } else {
        (
            status,
            Json(json!({ "message": "Service temporarily unavailable", "status": status.as_u16() })),
        )
            .into_response()
    }
}
