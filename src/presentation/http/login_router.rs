// src/presentation/http/login_router.rs
use std::sync::Arc;

use crate::application::{
    commands::auth::Authenticator,
    dto::AccessToken,
    error::{ApplicationError, ApplicationResult},
    ports::validation::EmailSyntaxChecker,
};
use crate::presentation::http::{error::HttpError, request::HttpRequest, response::HttpResponse};

/// Translates login requests into [`Authenticator`] calls and maps every
/// outcome, including collaborator failures, onto an [`HttpResponse`].
pub struct LoginRouter {
    authenticator: Option<Arc<dyn Authenticator>>,
    email_checker: Option<Arc<dyn EmailSyntaxChecker>>,
}

impl LoginRouter {
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        email_checker: Arc<dyn EmailSyntaxChecker>,
    ) -> Self {
        Self {
            authenticator: Some(authenticator),
            email_checker: Some(email_checker),
        }
    }

    pub fn builder() -> LoginRouterBuilder {
        LoginRouterBuilder::default()
    }

    pub async fn route(&self, request: Option<&HttpRequest>) -> HttpResponse {
        let Some(body) = request.and_then(|request| request.body.as_ref()) else {
            tracing::error!("login request carried no body");
            return HttpResponse::server_error();
        };

        let Some(email) = present(body.email.as_deref()) else {
            tracing::debug!("login request missing email");
            return HttpResponse::bad_request(HttpError::missing_parameter("email"));
        };
        let Some(password) = present(body.password.as_deref()) else {
            tracing::debug!("login request missing password");
            return HttpResponse::bad_request(HttpError::missing_parameter("password"));
        };

        match self.check_email(email).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("login request with malformed email");
                return HttpResponse::bad_request(HttpError::invalid_parameter("email"));
            }
            Err(err) => {
                tracing::error!(error = %err, "email syntax check failed");
                return HttpResponse::server_error();
            }
        }

        match self.authenticate(email, password).await {
            Ok(Some(token)) => HttpResponse::ok(token),
            Ok(None) => {
                tracing::info!("login rejected");
                HttpResponse::unauthorized()
            }
            Err(err) => {
                tracing::error!(error = %err, "authentication failed");
                HttpResponse::server_error()
            }
        }
    }

    async fn check_email(&self, email: &str) -> ApplicationResult<bool> {
        let checker = self
            .email_checker
            .as_deref()
            .ok_or_else(|| {
                ApplicationError::configuration("email syntax checker is not configured")
            })?;
        checker.is_valid(email).await
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> ApplicationResult<Option<AccessToken>> {
        let authenticator = self
            .authenticator
            .as_deref()
            .ok_or_else(|| ApplicationError::configuration("authenticator is not configured"))?;
        authenticator.authenticate(email, password).await
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[derive(Default)]
pub struct LoginRouterBuilder {
    authenticator: Option<Arc<dyn Authenticator>>,
    email_checker: Option<Arc<dyn EmailSyntaxChecker>>,
}

impl LoginRouterBuilder {
    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn with_email_checker(mut self, email_checker: Arc<dyn EmailSyntaxChecker>) -> Self {
        self.email_checker = Some(email_checker);
        self
    }

    pub fn build(self) -> LoginRouter {
        LoginRouter {
            authenticator: self.authenticator,
            email_checker: self.email_checker,
        }
    }
}
