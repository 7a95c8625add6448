use async_trait::async_trait;
use std::sync::Mutex;

use login_core::domain::errors::{DomainError, DomainResult};
use login_core::domain::user::{CredentialStore, PasswordHash, UserId, UserRecord};

pub fn any_user() -> UserRecord {
    UserRecord::new(
        UserId::new("any_id").expect("valid user id"),
        PasswordHash::new("hashed_password").expect("valid hash"),
    )
}

/// Records every email it is asked for and answers with a fixed record.
pub struct CredentialStoreSpy {
    user: Option<UserRecord>,
    fail: bool,
    emails: Mutex<Vec<String>>,
}

impl CredentialStoreSpy {
    pub fn returning(user: Option<UserRecord>) -> Self {
        Self {
            user,
            fail: false,
            emails: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            user: None,
            fail: true,
            emails: Mutex::new(Vec::new()),
        }
    }

    pub fn emails(&self) -> Vec<String> {
        self.emails.lock().unwrap().clone()
    }
}

impl Default for CredentialStoreSpy {
    fn default() -> Self {
        Self::returning(Some(any_user()))
    }
}

#[async_trait]
impl CredentialStore for CredentialStoreSpy {
    async fn load(&self, email: &str) -> DomainResult<Option<UserRecord>> {
        self.emails.lock().unwrap().push(email.to_string());
        if self.fail {
            return Err(DomainError::Persistence("store unavailable".into()));
        }
        Ok(self.user.clone())
    }
}
