// src/infrastructure/repositories/postgres_credentials.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{CredentialStore, PasswordHash, UserId, UserRecord};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CredentialRow {
    id: String,
    password_hash: String,
}

impl TryFrom<CredentialRow> for UserRecord {
    type Error = DomainError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        Ok(UserRecord::new(
            UserId::new(row.id)?,
            PasswordHash::new(row.password_hash)?,
        ))
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn load(&self, email: &str) -> DomainResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT id, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(UserRecord::try_from).transpose()
    }
}
