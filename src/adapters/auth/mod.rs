//! Credential adapters: JWT session tokens and Argon2 password hashing.

mod jwt;
mod password;

pub use jwt::{Claims, JwtTokenService, DEFAULT_TOKEN_TTL_DAYS};
pub use password::Argon2PasswordHasher;
