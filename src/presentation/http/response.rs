// src/presentation/http/response.rs
use crate::application::dto::AccessToken;
use crate::presentation::http::error::HttpError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Token {
        #[serde(rename = "accessToken")]
        access_token: AccessToken,
    },
    Error(HttpError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Option<ResponseBody>,
}

impl HttpResponse {
    pub fn ok(access_token: AccessToken) -> Self {
        Self {
            status: StatusCode::OK,
            body: Some(ResponseBody::Token { access_token }),
        }
    }

    pub fn bad_request(error: HttpError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: Some(ResponseBody::Error(error)),
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            body: Some(ResponseBody::Error(HttpError::Unauthorized)),
        }
    }

    pub fn server_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: Some(ResponseBody::Error(HttpError::ServerError)),
        }
    }

    pub fn error(&self) -> Option<&HttpError> {
        match &self.body {
            Some(ResponseBody::Error(err)) => Some(err),
            _ => None,
        }
    }

    pub fn access_token(&self) -> Option<&AccessToken> {
        match &self.body {
            Some(ResponseBody::Token { access_token }) => Some(access_token),
            _ => None,
        }
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}
