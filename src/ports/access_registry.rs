//! Port for the user-store access grant table.

use crate::domain::foundation::{DomainError, StoreId, UserId};
use async_trait::async_trait;

/// The many-to-many grant set. Mutation is master-only; that rule is
/// enforced by the application service, not here.
#[async_trait]
pub trait AccessRegistry: Send + Sync {
    /// Every grant pair, in no particular order.
    async fn list_all(&self) -> Result<Vec<(UserId, StoreId)>, DomainError>;

    /// True when a grant exists for the pair.
    async fn contains(&self, user_id: UserId, store_id: StoreId) -> Result<bool, DomainError>;

    /// Inserts a grant. Inserting an existing pair is a no-op.
    async fn insert(&self, user_id: UserId, store_id: StoreId) -> Result<(), DomainError>;

    /// Removes a grant. Removing a missing pair is a no-op.
    async fn remove(&self, user_id: UserId, store_id: StoreId) -> Result<(), DomainError>;
}
