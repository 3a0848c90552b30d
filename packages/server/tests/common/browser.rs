//! Request helpers for driving the router like a browser would.

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Request, StatusCode,
    },
    response::Response,
    Router,
};
use tower::ServiceExt;

/// A browser with a cookie jar of exactly one cookie: the session.
pub struct Browser {
    app: Router,
    cookie: Option<String>,
}

pub struct Page {
    pub status: StatusCode,
    pub location: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Page {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl Browser {
    pub fn new(app: Router) -> Self {
        Self { app, cookie: None }
    }

    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub async fn get(&mut self, uri: &str) -> Page {
        let request = self.request("GET", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_form(&mut self, uri: &str, form: &str) -> Page {
        let request = self
            .request("POST", uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Sign in through `/login` and the OAuth redirect back to `/`.
    pub async fn sign_in(&mut self) -> Page {
        let login = self.get("/login").await;
        assert_eq!(login.status, StatusCode::SEE_OTHER);
        let location = login.location.expect("login redirects to LinkedIn");
        let state = query_param(&location, "state").expect("authorization URL carries state");

        self.get(&format!("/?code=abc&state={}", state)).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> Page {
        let response = self.app.clone().oneshot(request).await.unwrap();
        self.remember_cookie(&response);

        let status = response.status();
        let location = header(&response, LOCATION);
        let content_type = header(&response, CONTENT_TYPE);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        Page {
            status,
            location,
            content_type,
            body,
        }
    }

    /// Keep the `name=value` part of the last `Set-Cookie`; an empty value
    /// is a removal.
    fn remember_cookie(&mut self, response: &Response) {
        let Some(value) = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .last()
        else {
            return;
        };
        let pair = value.split(';').next().unwrap_or_default().trim();
        self.cookie = match pair.split_once('=') {
            Some((_, "")) | None => None,
            Some(_) => Some(pair.to_string()),
        };
    }
}

fn header(response: &Response, name: axum::http::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Raw (still percent-encoded) query parameter value
pub fn query_param(url: &str, name: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
