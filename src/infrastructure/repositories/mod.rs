// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_credentials;

pub(crate) use error::map_sqlx;
pub use postgres_credentials::PostgresCredentialStore;
