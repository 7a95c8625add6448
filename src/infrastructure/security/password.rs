use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordVerifier,
};
use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
        rand_core::OsRng,
    },
};
use async_trait::async_trait;

#[derive(Default, Clone)]
pub struct Argon2PasswordVerifier;

impl Argon2PasswordVerifier {
    /// Produces a PHC string suitable for the `users.password_hash` column.
    pub async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }
}

#[async_trait]
impl PasswordVerifier for Argon2PasswordVerifier {
    async fn compare(&self, password: &str, hash: &str) -> ApplicationResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || -> ApplicationResult<bool> {
            let parsed = PasswordHash::new(&hash)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
            match Argon2::default().verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(err) => Err(ApplicationError::infrastructure(err.to_string())),
            }
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }
}
