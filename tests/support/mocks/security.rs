// tests/support/mocks/security.rs
use async_trait::async_trait;
use std::sync::Mutex;

use login_core::application::ApplicationResult;
use login_core::application::dto::AccessToken;
use login_core::application::error::ApplicationError;
use login_core::application::ports::security::{PasswordVerifier, TokenIssuer};
use login_core::application::ports::validation::EmailSyntaxChecker;
use login_core::domain::user::UserId;

/* -------------------------------- PasswordVerifier -------------------------------- */

pub struct PasswordVerifierSpy {
    is_valid: bool,
    fail: bool,
    calls: Mutex<Vec<(String, String)>>,
}

impl PasswordVerifierSpy {
    pub fn matching(is_valid: bool) -> Self {
        Self {
            is_valid,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            is_valid: false,
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(password, hash)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for PasswordVerifierSpy {
    fn default() -> Self {
        Self::matching(true)
    }
}

#[async_trait]
impl PasswordVerifier for PasswordVerifierSpy {
    async fn compare(&self, password: &str, hash: &str) -> ApplicationResult<bool> {
        self.calls
            .lock()
            .unwrap()
            .push((password.to_string(), hash.to_string()));
        if self.fail {
            return Err(ApplicationError::infrastructure("verifier exploded"));
        }
        Ok(self.is_valid)
    }
}

/* -------------------------------- TokenIssuer -------------------------------- */

pub struct TokenIssuerSpy {
    token: String,
    fail: bool,
    user_ids: Mutex<Vec<String>>,
}

impl TokenIssuerSpy {
    pub fn issuing(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            fail: false,
            user_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            token: String::new(),
            fail: true,
            user_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn user_ids(&self) -> Vec<String> {
        self.user_ids.lock().unwrap().clone()
    }
}

impl Default for TokenIssuerSpy {
    fn default() -> Self {
        Self::issuing("any_token")
    }
}

#[async_trait]
impl TokenIssuer for TokenIssuerSpy {
    async fn issue(&self, user_id: &UserId) -> ApplicationResult<AccessToken> {
        self.user_ids.lock().unwrap().push(user_id.to_string());
        if self.fail {
            return Err(ApplicationError::infrastructure("signing key unavailable"));
        }
        Ok(AccessToken::new(self.token.clone()))
    }
}

/* -------------------------------- EmailSyntaxChecker -------------------------------- */

pub struct EmailSyntaxCheckerSpy {
    is_valid: bool,
    fail: bool,
    emails: Mutex<Vec<String>>,
}

impl EmailSyntaxCheckerSpy {
    pub fn answering(is_valid: bool) -> Self {
        Self {
            is_valid,
            fail: false,
            emails: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            is_valid: false,
            fail: true,
            emails: Mutex::new(Vec::new()),
        }
    }

    pub fn emails(&self) -> Vec<String> {
        self.emails.lock().unwrap().clone()
    }
}

impl Default for EmailSyntaxCheckerSpy {
    fn default() -> Self {
        Self::answering(true)
    }
}

#[async_trait]
impl EmailSyntaxChecker for EmailSyntaxCheckerSpy {
    async fn is_valid(&self, email: &str) -> ApplicationResult<bool> {
        self.emails.lock().unwrap().push(email.to_string());
        if self.fail {
            return Err(ApplicationError::infrastructure("validator crashed"));
        }
        Ok(self.is_valid)
    }
}
