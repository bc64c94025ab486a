//! Port for store persistence.

use crate::domain::foundation::{DomainError, Principal, StoreId};
use crate::domain::store::Store;
use async_trait::async_trait;

#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn create(&self, store: &Store) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: StoreId) -> Result<Option<Store>, DomainError>;

    /// The stores the principal may see, newest first: every store for
    /// a master, owned ∪ granted for everyone else.
    async fn list_visible(&self, principal: &Principal) -> Result<Vec<Store>, DomainError>;

    /// Overwrites the store's name.
    async fn update(&self, store: &Store) -> Result<(), DomainError>;

    /// Deletes the store and cascades every store-scoped child kind.
    async fn delete(&self, id: StoreId) -> Result<(), DomainError>;
}
