//! Port for user account persistence.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new account. Fails with a validation error when the
    /// username is already taken.
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// All accounts, newest first.
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Overwrites the mutable fields (name, role) of an existing row.
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    async fn delete(&self, id: UserId) -> Result<(), DomainError>;

    /// Number of master accounts; guards last-master protection.
    async fn count_masters(&self) -> Result<u32, DomainError>;
}
