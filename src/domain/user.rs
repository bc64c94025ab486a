//! User accounts and the registration policies.
//!
//! Usernames are lowercase ASCII letters only; passwords are exactly
//! six ASCII digits (a numeric PIN). The password never appears in
//! this type — only its Argon2 hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::foundation::{DomainError, Role, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a freshly registered account. Callers must have already
    /// validated the username and hashed the password.
    pub fn register(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            password_hash: password_hash.into(),
            name: name.into(),
            role,
            created_at: now,
        }
    }
}

/// Validates the username policy: non-empty, lowercase ASCII letters only.
pub fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.is_empty() {
        return Err(DomainError::validation("username", "Username is required"));
    }
    if !username.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(DomainError::validation(
            "username",
            "Username must contain lowercase letters only",
        ));
    }
    Ok(())
}

/// Validates the password policy: exactly six ASCII digits.
pub fn validate_pin(password: &str) -> Result<(), DomainError> {
    if password.len() != 6 || !password.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::validation(
            "password",
            "Password must be exactly six digits",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_username_and_six_digit_pin() {
        assert!(validate_username("thiago").is_ok());
        assert!(validate_pin("271205").is_ok());
    }

    #[test]
    fn rejects_username_with_uppercase_or_digits() {
        assert!(validate_username("Ana").is_err());
        assert!(validate_username("ana1").is_err());
        assert!(validate_username("Ana1").is_err());
    }

    #[test]
    fn rejects_empty_username() {
        assert!(validate_username("").is_err());
    }

    #[test]
    fn rejects_username_with_spaces_or_symbols() {
        assert!(validate_username("ana maria").is_err());
        assert!(validate_username("ana_maria").is_err());
    }

    #[test]
    fn rejects_short_long_or_alpha_pins() {
        assert!(validate_pin("12345").is_err());
        assert!(validate_pin("1234567").is_err());
        assert!(validate_pin("abcdef").is_err());
        assert!(validate_pin("12a456").is_err());
    }

    #[test]
    fn register_assigns_fresh_id_and_keeps_role() {
        let now = Utc::now();
        let a = User::register("ana", "hash", "Ana", Role::User, now);
        let b = User::register("bia", "hash", "Bia", Role::User, now);
        assert_ne!(a.id, b.id);
        assert_eq!(a.role, Role::User);
        assert_eq!(a.created_at, now);
    }
}
