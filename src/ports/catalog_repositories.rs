//! Ports for the catalog kinds: suppliers and product groups.

use crate::domain::catalog::{ProductGroup, Supplier};
use crate::domain::foundation::{DomainError, GroupId, StoreId, SupplierId};
use async_trait::async_trait;

#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// All of a store's suppliers, name ascending.
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<Supplier>, DomainError>;

    async fn insert(&self, supplier: &Supplier) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, DomainError>;

    async fn update(&self, supplier: &Supplier) -> Result<(), DomainError>;

    async fn delete(&self, id: SupplierId) -> Result<(), DomainError>;
}

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// All of a store's product groups, name ascending.
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<ProductGroup>, DomainError>;

    async fn insert(&self, group: &ProductGroup) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: GroupId) -> Result<Option<ProductGroup>, DomainError>;

    async fn update(&self, group: &ProductGroup) -> Result<(), DomainError>;

    async fn delete(&self, id: GroupId) -> Result<(), DomainError>;
}
