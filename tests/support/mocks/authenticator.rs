use async_trait::async_trait;
use std::sync::Mutex;

use login_core::application::ApplicationResult;
use login_core::application::commands::auth::Authenticator;
use login_core::application::dto::AccessToken;
use login_core::application::error::ApplicationError;

#[derive(Clone, Debug)]
pub enum AuthenticatorOutcome {
    Token(String),
    Rejected,
    Fail,
}

pub struct AuthenticatorSpy {
    outcome: AuthenticatorOutcome,
    calls: Mutex<Vec<(String, String)>>,
}

impl AuthenticatorSpy {
    pub fn new(outcome: AuthenticatorOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(email, password)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for AuthenticatorSpy {
    fn default() -> Self {
        Self::new(AuthenticatorOutcome::Token("valid_token".into()))
    }
}

#[async_trait]
impl Authenticator for AuthenticatorSpy {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> ApplicationResult<Option<AccessToken>> {
        self.calls
            .lock()
            .unwrap()
            .push((email.to_string(), password.to_string()));
        match &self.outcome {
            AuthenticatorOutcome::Token(token) => Ok(Some(AccessToken::new(token.clone()))),
            AuthenticatorOutcome::Rejected => Ok(None),
            AuthenticatorOutcome::Fail => Err(ApplicationError::infrastructure("database is down")),
        }
    }
}
