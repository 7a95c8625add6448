// src/presentation/http/controllers/auth.rs
use crate::presentation::http::{request::HttpRequest, response::HttpResponse, state::HttpState};
use axum::{Extension, body::Bytes};

pub async fn login(Extension(state): Extension<HttpState>, body: Bytes) -> HttpResponse {
    let request = HttpRequest::from_json_bytes(&body);
    state.login_router.route(Some(&request)).await
}
