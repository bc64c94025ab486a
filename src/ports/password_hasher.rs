//! Port for one-way password hashing.

use crate::domain::foundation::DomainError;

/// Hashing is CPU-bound and fast at this scale; the port is
/// synchronous and implementations run inline on the request task.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password into a self-describing hash string.
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verifies a plaintext password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}
