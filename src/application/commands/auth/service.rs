use std::sync::Arc;

use crate::application::ports::security::{PasswordVerifier, TokenIssuer};
use crate::domain::user::CredentialStore;

/// Email/password authentication.
///
/// Collaborators are optional so that a partially wired instance fails with
/// [`ApplicationError::Configuration`] instead of at construction time.
///
/// [`ApplicationError::Configuration`]: crate::application::error::ApplicationError::Configuration
pub struct AuthUseCase {
    pub(super) credential_store: Option<Arc<dyn CredentialStore>>,
    pub(super) password_verifier: Option<Arc<dyn PasswordVerifier>>,
    pub(super) token_issuer: Option<Arc<dyn TokenIssuer>>,
}

impl AuthUseCase {
    pub fn new(
        credential_store: Arc<dyn CredentialStore>,
        password_verifier: Arc<dyn PasswordVerifier>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            credential_store: Some(credential_store),
            password_verifier: Some(password_verifier),
            token_issuer: Some(token_issuer),
        }
    }

    pub fn builder() -> AuthUseCaseBuilder {
        AuthUseCaseBuilder::default()
    }
}

#[derive(Default)]
pub struct AuthUseCaseBuilder {
    credential_store: Option<Arc<dyn CredentialStore>>,
    password_verifier: Option<Arc<dyn PasswordVerifier>>,
    token_issuer: Option<Arc<dyn TokenIssuer>>,
}

impl AuthUseCaseBuilder {
    pub fn with_credential_store(mut self, credential_store: Arc<dyn CredentialStore>) -> Self {
        self.credential_store = Some(credential_store);
        self
    }

    pub fn with_password_verifier(mut self, password_verifier: Arc<dyn PasswordVerifier>) -> Self {
        self.password_verifier = Some(password_verifier);
        self
    }

    pub fn with_token_issuer(mut self, token_issuer: Arc<dyn TokenIssuer>) -> Self {
        self.token_issuer = Some(token_issuer);
        self
    }

    pub fn build(self) -> AuthUseCase {
        AuthUseCase {
            credential_store: self.credential_store,
            password_verifier: self.password_verifier,
            token_issuer: self.token_issuer,
        }
    }
}
