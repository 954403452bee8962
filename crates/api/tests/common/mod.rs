//! Shared harness for API integration tests.
//!
//! Builds the production router (same middleware stack as `main.rs`) over a
//! per-test database and a temporary static page directory, plus request
//! helpers driven by `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use fintrack_api::config::{ServerConfig, SessionConfig};
use fintrack_api::router::build_app_router;
use fintrack_api::state::AppState;
use fintrack_core::routing::RouteTable;

pub const TEST_SECRET: &str = "test-session-secret-that-is-long-enough";
pub const INDEX_HTML: &str = "<!doctype html><title>fintrack</title>";
pub const TEST_PASSWORD: &str = "password123";

/// Router plus the temp dir backing its static pages (removed on drop).
pub struct TestApp {
    router: Router,
    _static_dir: TempDir,
}

impl TestApp {
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

pub fn session_config() -> SessionConfig {
    SessionConfig {
        secret: TEST_SECRET.to_string(),
        ttl_days: 7,
        secure_cookies: false,
    }
}

/// Build a test `ServerConfig` with development defaults.
pub fn test_config(static_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        static_dir: static_dir.to_path_buf(),
        routes: RouteTable::default(),
        session: session_config(),
    }
}

/// Build the full application router over `pool`.
pub fn build_test_app(pool: PgPool) -> TestApp {
    let static_dir = tempfile::tempdir().expect("temp dir should be created");
    std::fs::write(static_dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(static_dir.path().join("logo.png"), b"\x89PNG").unwrap();

    let config = test_config(static_dir.path());
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        _static_dir: static_dir,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    send(app, Method::GET, uri, Some(cookie), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    send(app, Method::POST, uri, Some(cookie), None).await
}

pub async fn post_json_with_cookie(app: Router, uri: &str, cookie: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(cookie), Some(body)).await
}

pub async fn put_json_with_cookie(app: Router, uri: &str, cookie: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(cookie), Some(body)).await
}

pub async fn delete_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    send(app, Method::DELETE, uri, Some(cookie), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Session helpers
// ---------------------------------------------------------------------------

/// The raw `Set-Cookie` header for the session cookie, if the response set one.
pub fn session_set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("session="))
        .map(str::to_string)
}

/// The `session=<token>` pair to send back in a `Cookie` header.
pub fn session_cookie(response: &Response) -> String {
    let set_cookie = session_set_cookie(response).expect("response should set the session cookie");
    set_cookie
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Sign up through the API and return the session cookie pair.
pub async fn signup(app: Router, email: &str) -> String {
    let body = serde_json::json!({
        "fullName": "Test User",
        "email": email,
        "password": TEST_PASSWORD,
    });
    let response = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    session_cookie(&response)
}
