use super::AuthUseCase;
use crate::{
    application::{
        dto::AccessToken,
        error::{ApplicationError, ApplicationResult},
        ports::security::{PasswordVerifier, TokenIssuer},
    },
    domain::user::CredentialStore,
};
use async_trait::async_trait;

/// Inbound port of the login flow.
///
/// `Ok(None)` covers both an unknown email and a wrong password; callers
/// cannot tell the two apart.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> ApplicationResult<Option<AccessToken>>;
}

struct Collaborators<'a> {
    credential_store: &'a dyn CredentialStore,
    password_verifier: &'a dyn PasswordVerifier,
    token_issuer: &'a dyn TokenIssuer,
}

impl AuthUseCase {
    fn collaborators(&self) -> ApplicationResult<Collaborators<'_>> {
        let credential_store = self
            .credential_store
            .as_deref()
            .ok_or_else(|| ApplicationError::configuration("credential store is not configured"))?;
        let password_verifier = self
            .password_verifier
            .as_deref()
            .ok_or_else(|| ApplicationError::configuration("password verifier is not configured"))?;
        let token_issuer = self
            .token_issuer
            .as_deref()
            .ok_or_else(|| ApplicationError::configuration("token issuer is not configured"))?;

        Ok(Collaborators {
            credential_store,
            password_verifier,
            token_issuer,
        })
    }
}

#[async_trait]
impl Authenticator for AuthUseCase {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> ApplicationResult<Option<AccessToken>> {
        require_param("email", email)?;
        require_param("password", password)?;

        let Collaborators {
            credential_store,
            password_verifier,
            token_issuer,
        } = self.collaborators()?;

        let Some(user) = credential_store.load(email).await? else {
            tracing::debug!("login rejected: unknown email");
            return Ok(None);
        };

        if !password_verifier
            .compare(password, user.password_hash.as_str())
            .await?
        {
            tracing::debug!(user_id = %user.id, "login rejected: password mismatch");
            return Ok(None);
        }

        let token = token_issuer.issue(&user.id).await?;
        tracing::debug!(user_id = %user.id, "access token issued");

        Ok(Some(token))
    }
}

fn require_param(name: &str, value: &str) -> ApplicationResult<()> {
    if value.is_empty() {
        return Err(ApplicationError::missing_parameter(name));
    }
    Ok(())
}
