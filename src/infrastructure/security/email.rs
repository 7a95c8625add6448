use crate::application::{ApplicationResult, ports::validation::EmailSyntaxChecker};
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern must compile")
});

#[derive(Default, Clone)]
pub struct RegexEmailSyntaxChecker;

impl RegexEmailSyntaxChecker {
    pub fn check(email: &str) -> bool {
        email.len() <= MAX_EMAIL_LENGTH && EMAIL_PATTERN.is_match(email)
    }
}

#[async_trait]
impl EmailSyntaxChecker for RegexEmailSyntaxChecker {
    async fn is_valid(&self, email: &str) -> ApplicationResult<bool> {
        Ok(Self::check(email))
    }
}
