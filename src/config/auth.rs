//! Authentication configuration: JWT signing and master bootstrap.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens.
    pub jwt_secret: SecretString,

    /// Token lifetime in days.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,

    /// Username for the seeded master account.
    #[serde(default = "default_bootstrap_username")]
    pub bootstrap_username: String,

    /// Six-digit PIN for the seeded master account.
    #[serde(default = "default_bootstrap_password")]
    pub bootstrap_password: SecretString,

    /// Display name for the seeded master account.
    #[serde(default = "default_bootstrap_name")]
    pub bootstrap_name: String,
}

impl AuthConfig {
    pub fn jwt_secret_len(&self) -> usize {
        self.jwt_secret.expose_secret().len()
    }
}

fn default_token_ttl_days() -> i64 {
    7
}

fn default_bootstrap_username() -> String {
    "admin".to_string()
}

fn default_bootstrap_password() -> SecretString {
    SecretString::new("000000".to_string())
}

fn default_bootstrap_name() -> String {
    "Administrator".to_string()
}
