// src/bin/hash_password.rs
use anyhow::{Context, Result, bail};
use login_core::infrastructure::security::password::Argon2PasswordVerifier;

#[tokio::main]
async fn main() -> Result<()> {
    let password = std::env::args()
        .nth(1)
        .context("usage: hash_password <password>")?;
    if password.is_empty() {
        bail!("password must not be empty");
    }

    let hash = Argon2PasswordVerifier.hash(&password).await?;
    println!("{hash}");
    Ok(())
}
