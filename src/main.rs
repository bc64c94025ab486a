//! Binary entry point: configuration, tracing, storage, bootstrap,
//! and the HTTP server.

use std::error::Error;
use std::sync::Arc;

use secrecy::ExposeSecret;
use axum::http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cmc_control::adapters::auth::{Argon2PasswordHasher, JwtTokenService};
use cmc_control::adapters::http::{router, AppState};
use cmc_control::adapters::postgres;
use cmc_control::application::IdentityService;
use cmc_control::config::{AppConfig, ServerConfig};
use cmc_control::ports::{PasswordHasher, TokenService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let pool = postgres::connect(&config.database).await?;
    if config.database.run_migrations {
        postgres::run_migrations(&pool).await?;
        tracing::info!("migrations applied");
    }

    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(
        &config.auth.jwt_secret,
        config.auth.token_ttl_days,
    ));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());

    let ports = postgres::ports(pool);

    // Seed the first master account when none exists yet.
    let identity = IdentityService::new(ports.users.clone(), hasher.clone(), tokens.clone());
    identity
        .bootstrap_master(
            &config.auth.bootstrap_username,
            config.auth.bootstrap_password.expose_secret(),
            &config.auth.bootstrap_name,
        )
        .await?;

    let state = AppState::new(ports, tokens, hasher);
    let app = router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.server)),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "cmc-control listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Permissive in development; restricted to the configured origins
/// when any are set.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = server
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
