// src/application/ports/validation.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait EmailSyntaxChecker: Send + Sync {
    async fn is_valid(&self, email: &str) -> ApplicationResult<bool>;
}
