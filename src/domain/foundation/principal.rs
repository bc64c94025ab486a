//! The authenticated principal and its role.
//!
//! A `Principal` is what a validated bearer token decodes to. It is a
//! domain type with no token-library dependency; the `TokenService`
//! port populates it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::UserId;

/// Account role. Masters manage users and grants and see every store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Master,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Master => "master",
            Role::User => "user",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "master" => Some(Role::Master),
            "user" => Some(Role::User),
            _ => None,
        }
    }

    pub fn is_master(&self) -> bool {
        matches!(self, Role::Master)
    }
}

/// Authenticated user extracted from a validated token.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: UserId,
    pub username: String,
    pub role: Role,
}

impl Principal {
    pub fn new(id: UserId, username: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: username.into(),
            role,
        }
    }

    pub fn is_master(&self) -> bool {
        self.role.is_master()
    }
}

/// Errors from token issuing and validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// Token generation failed (key or encoding problem).
    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}
