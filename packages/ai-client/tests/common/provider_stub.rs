//! In-process stand-in for a generation provider.
//!
//! Binds to 127.0.0.1:0, records every request and answers all paths with
//! one scripted reply.

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Debug, Clone)]
struct Reply {
    status: StatusCode,
    content_type: String,
    body: Vec<u8>,
}

struct StubState {
    reply: Mutex<Reply>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct ProviderStub {
    pub base_url: String,
    state: Arc<StubState>,
    handle: JoinHandle<()>,
}

impl ProviderStub {
    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let state = Arc::new(StubState {
            reply: Mutex::new(Reply {
                status: StatusCode::OK,
                content_type: "application/json".into(),
                body: b"{}".to_vec(),
            }),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(reply_handler)
            .with_state(state.clone());

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url,
            state,
            handle,
        }
    }

    pub fn reply(&self, status: StatusCode, content_type: &str, body: impl Into<Vec<u8>>) {
        *self.state.reply.lock().unwrap() = Reply {
            status,
            content_type: content_type.to_string(),
            body: body.into(),
        };
    }

    pub fn reply_json(&self, status: StatusCode, body: serde_json::Value) {
        self.reply(status, "application/json", body.to_string());
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for ProviderStub {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn reply_handler(
    State(state): State<Arc<StubState>>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        headers,
        body: body.to_vec(),
    });

    let reply = state.reply.lock().unwrap().clone();
    (reply.status, [(CONTENT_TYPE, reply.content_type)], reply.body).into_response()
}
