// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AccessToken};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    /// `Ok(false)` means the password does not match; `Err` is reserved for
    /// failures such as an unparseable hash.
    async fn compare(&self, password: &str, hash: &str) -> ApplicationResult<bool>;
}

#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn issue(&self, user_id: &UserId) -> ApplicationResult<AccessToken>;
}
