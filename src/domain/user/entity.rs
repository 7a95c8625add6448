// src/domain/user/entity.rs
use crate::domain::user::value_objects::{PasswordHash, UserId};

/// Credential view of a user as returned by a [`CredentialStore`].
///
/// [`CredentialStore`]: crate::domain::user::CredentialStore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub password_hash: PasswordHash,
}

impl UserRecord {
    pub fn new(id: UserId, password_hash: PasswordHash) -> Self {
        Self { id, password_hash }
    }
}
