//! Configuration error types.

use thiserror::Error;

/// Errors while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors from semantic validation of loaded values.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("database.url must be a postgres:// connection string")]
    InvalidDatabaseUrl,

    #[error("database.max_connections must be between 1 and {max}, got {actual}")]
    PoolSizeOutOfRange { max: u32, actual: u32 },

    #[error("auth.jwt_secret must be at least {min} bytes")]
    JwtSecretTooShort { min: usize },

    #[error("auth.token_ttl_days must be positive, got {actual}")]
    InvalidTokenTtl { actual: i64 },

    #[error("server.port must not be 0")]
    InvalidPort,
}
