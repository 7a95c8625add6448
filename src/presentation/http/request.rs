// src/presentation/http/request.rs
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequestBody {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

/// Transport-neutral login request handed to [`LoginRouter`].
///
/// [`LoginRouter`]: crate::presentation::http::login_router::LoginRouter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpRequest {
    pub body: Option<LoginRequestBody>,
}

impl HttpRequest {
    pub fn with_body(body: LoginRequestBody) -> Self {
        Self { body: Some(body) }
    }

    /// Decodes a raw JSON payload. Anything that is not a JSON object with
    /// optional string `email`/`password` fields yields a request without a body.
    pub fn from_json_bytes(bytes: &[u8]) -> Self {
        let body = serde_json::from_slice::<LoginRequestBody>(bytes).ok();
        Self { body }
    }
}
