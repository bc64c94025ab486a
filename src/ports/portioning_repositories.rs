//! Ports for portioned products and their price entries.

use crate::domain::foundation::{DomainError, PortionedEntryId, PortionedProductId, StoreId};
use crate::domain::portioning::{
    PortionedEntry, PortionedEntryView, PortionedProduct, PortionedProductView,
};
use async_trait::async_trait;

#[async_trait]
pub trait PortionedProductRepository: Send + Sync {
    /// All of a store's portioned products, newest first, with the
    /// supplier name joined in.
    async fn list_by_store(
        &self,
        store_id: StoreId,
    ) -> Result<Vec<PortionedProductView>, DomainError>;

    async fn insert(&self, product: &PortionedProduct) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        id: PortionedProductId,
    ) -> Result<Option<PortionedProduct>, DomainError>;

    async fn delete(&self, id: PortionedProductId) -> Result<(), DomainError>;
}

#[async_trait]
pub trait PortionedEntryRepository: Send + Sync {
    /// All of a store's entries, entry date descending then creation
    /// order descending, with the supplier name joined in.
    async fn list_by_store(
        &self,
        store_id: StoreId,
    ) -> Result<Vec<PortionedEntryView>, DomainError>;

    async fn insert(&self, entry: &PortionedEntry) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        id: PortionedEntryId,
    ) -> Result<Option<PortionedEntry>, DomainError>;

    async fn delete(&self, id: PortionedEntryId) -> Result<(), DomainError>;
}
