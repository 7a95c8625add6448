// src/presentation/http/state.rs
use crate::presentation::http::login_router::LoginRouter;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub login_router: Arc<LoginRouter>,
}
