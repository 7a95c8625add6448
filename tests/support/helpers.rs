// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

use login_core::application::commands::auth::Authenticator;
use login_core::application::ports::validation::EmailSyntaxChecker;
use login_core::presentation::http::{
    login_router::LoginRouter, request::{HttpRequest, LoginRequestBody}, routes::build_router,
    state::HttpState,
};

pub fn login_request(email: &str, password: &str) -> HttpRequest {
    HttpRequest::with_body(LoginRequestBody::new(email, password))
}

pub fn make_test_router(
    authenticator: Arc<dyn Authenticator>,
    email_checker: Arc<dyn EmailSyntaxChecker>,
) -> axum::Router {
    let state = HttpState {
        login_router: Arc::new(LoginRouter::new(authenticator, email_checker)),
    };
    build_router(state)
}

/// POSTs `payload` to the login endpoint and returns the status plus the
/// decoded JSON body (`Value::Null` when the body is empty).
pub async fn post_login(app: axum::Router, payload: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
