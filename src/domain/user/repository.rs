use crate::domain::errors::DomainResult;
use crate::domain::user::entity::UserRecord;
use async_trait::async_trait;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns `Ok(None)` when no user is registered under `email`.
    async fn load(&self, email: &str) -> DomainResult<Option<UserRecord>>;
}
