use anyhow::Result;
use login_core::application::{
    commands::auth::{AuthUseCase, Authenticator},
    ports::{
        security::{PasswordVerifier, TokenIssuer},
        validation::EmailSyntaxChecker,
    },
};
use login_core::config::AppConfig;
use login_core::domain::user::CredentialStore;
use login_core::infrastructure::{
    database,
    repositories::PostgresCredentialStore,
    security::{
        email::RegexEmailSyntaxChecker, password::Argon2PasswordVerifier,
        token::BiscuitTokenIssuer,
    },
};
use login_core::presentation::http::{
    login_router::LoginRouter, routes::build_router, state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let credential_store: Arc<dyn CredentialStore> = Arc::new(PostgresCredentialStore::new(pool));
    let password_verifier: Arc<dyn PasswordVerifier> = Arc::new(Argon2PasswordVerifier);
    let token_issuer: Arc<dyn TokenIssuer> = Arc::new(BiscuitTokenIssuer::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let email_checker: Arc<dyn EmailSyntaxChecker> = Arc::new(RegexEmailSyntaxChecker);

    let authenticator: Arc<dyn Authenticator> = Arc::new(AuthUseCase::new(
        credential_store,
        password_verifier,
        token_issuer,
    ));

    let state = HttpState {
        login_router: Arc::new(LoginRouter::new(authenticator, email_checker)),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
