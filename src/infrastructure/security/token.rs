// src/infrastructure/security/token.rs
use crate::application::{
    dto::AccessToken,
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenIssuer,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, Term},
};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

const ACCESS_TOKEN_CODE: &str = r#"
    user({uid});
    issued_at({issued});
    expires_at({exp});
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
    token_type("access");
    check if token_type("access");
"#;

/// Issues sealed Biscuit tokens signed with an Ed25519 root key.
#[derive(Clone)]
pub struct BiscuitTokenIssuer {
    root: Arc<KeyPair>,
    ttl: Duration,
}

impl BiscuitTokenIssuer {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self::from_keypair(KeyPair::from(&private), ttl))
    }

    pub fn from_keypair(root: KeyPair, ttl: Duration) -> Self {
        Self {
            root: Arc::new(root),
            ttl,
        }
    }

    pub fn public_key(&self) -> PublicKey {
        self.root.public()
    }
}

fn build_params(
    user_id: &UserId,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> HashMap<String, Term> {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), user_id.as_str().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());
    params
}

fn build_and_serialize_biscuit(
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    let token = Biscuit::builder()
        .code_with_params(ACCESS_TOKEN_CODE, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

#[async_trait]
impl TokenIssuer for BiscuitTokenIssuer {
    async fn issue(&self, user_id: &UserId) -> ApplicationResult<AccessToken> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let params = build_params(user_id, issued_at, expires_at);
        let serialized = build_and_serialize_biscuit(params, self.root.as_ref())?;

        Ok(AccessToken::new(serialized))
    }
}
