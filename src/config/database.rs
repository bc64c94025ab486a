//! Database configuration.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string. Treated as a secret — it embeds
    /// credentials.
    pub url: SecretString,

    /// Connection pool size.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Whether to apply migrations at startup.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn url_is_postgres(&self) -> bool {
        let url = self.url.expose_secret();
        url.starts_with("postgres://") || url.starts_with("postgresql://")
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_run_migrations() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_postgres_urls() {
        let config = DatabaseConfig {
            url: SecretString::new("postgresql://user:pw@localhost/cmc".to_string()),
            max_connections: 10,
            run_migrations: true,
        };
        assert!(config.url_is_postgres());

        let config = DatabaseConfig {
            url: SecretString::new("mysql://localhost".to_string()),
            max_connections: 10,
            run_migrations: true,
        };
        assert!(!config.url_is_postgres());
    }
}
