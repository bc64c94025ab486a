//! Application configuration.
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `CMC_CONTROL`
//! prefix with `__` separating nested sections:
//!
//! ```text
//! CMC_CONTROL__SERVER__PORT=5000
//! CMC_CONTROL__DATABASE__URL=postgresql://...
//! CMC_CONTROL__AUTH__JWT_SECRET=...
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

const MAX_POOL_SIZE: u32 = 100;
const MIN_JWT_SECRET_BYTES: usize = 32;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS).
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection).
    pub database: DatabaseConfig,

    /// Authentication configuration (JWT, master bootstrap).
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Loads configuration from the environment, reading `.env` first
    /// when present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CMC_CONTROL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of loaded values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.server.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !self.database.url_is_postgres() {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if !(1..=MAX_POOL_SIZE).contains(&self.database.max_connections) {
            return Err(ValidationError::PoolSizeOutOfRange {
                max: MAX_POOL_SIZE,
                actual: self.database.max_connections,
            });
        }
        if self.auth.jwt_secret_len() < MIN_JWT_SECRET_BYTES {
            return Err(ValidationError::JwtSecretTooShort {
                min: MIN_JWT_SECRET_BYTES,
            });
        }
        if self.auth.token_ttl_days <= 0 {
            return Err(ValidationError::InvalidTokenTtl {
                actual: self.auth.token_ttl_days,
            });
        }
        Ok(())
    }
}
