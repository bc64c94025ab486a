//! Portioning services: product definitions and their append-only
//! price entries.

use chrono::Utc;

use crate::domain::foundation::{
    DomainError, PortionedEntryId, PortionedProductId, Principal, StoreId,
};
use crate::domain::portioning::{
    PortionedEntry, PortionedEntryDraft, PortionedEntryView, PortionedProduct,
    PortionedProductDraft, PortionedProductView,
};
use crate::ports::{PortionedEntryRepository, PortionedProductRepository};

use super::scoped::StoreScoped;

pub struct PortioningService {
    products: StoreScoped<dyn PortionedProductRepository>,
    entries: StoreScoped<dyn PortionedEntryRepository>,
}

impl PortioningService {
    pub fn new(
        products: StoreScoped<dyn PortionedProductRepository>,
        entries: StoreScoped<dyn PortionedEntryRepository>,
    ) -> Self {
        Self { products, entries }
    }

    pub async fn list_products(
        &self,
        principal: &Principal,
        store_id: StoreId,
    ) -> Result<Vec<PortionedProductView>, DomainError> {
        self.products.authorize(principal, store_id).await?;
        self.products.repo().list_by_store(store_id).await
    }

    pub async fn create_product(
        &self,
        principal: &Principal,
        store_id: StoreId,
        draft: PortionedProductDraft,
    ) -> Result<PortionedProduct, DomainError> {
        self.products.authorize(principal, store_id).await?;
        let product = draft.into_product(store_id, Utc::now())?;
        self.products.repo().insert(&product).await?;
        Ok(product)
    }

    pub async fn delete_product(
        &self,
        principal: &Principal,
        id: PortionedProductId,
    ) -> Result<(), DomainError> {
        let existing = self
            .products
            .repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::record_not_found("Portioned product"))?;
        self.products.authorize(principal, existing.store_id).await?;
        self.products.repo().delete(id).await
    }

    pub async fn list_entries(
        &self,
        principal: &Principal,
        store_id: StoreId,
    ) -> Result<Vec<PortionedEntryView>, DomainError> {
        self.entries.authorize(principal, store_id).await?;
        self.entries.repo().list_by_store(store_id).await
    }

    /// Appends a price entry. The referenced product must belong to
    /// the same store; the protein name is snapshotted on the entry.
    pub async fn create_entry(
        &self,
        principal: &Principal,
        store_id: StoreId,
        draft: PortionedEntryDraft,
    ) -> Result<PortionedEntry, DomainError> {
        self.entries.authorize(principal, store_id).await?;

        let product = self
            .products
            .repo()
            .find_by_id(draft.portioned_product_id)
            .await?;
        match product {
            Some(p) if p.store_id == store_id => {}
            _ => {
                return Err(DomainError::validation(
                    "portionedProductId",
                    "Portioned product not found in this store",
                ))
            }
        }

        let entry = draft.into_entry(store_id, Utc::now())?;
        self.entries.repo().insert(&entry).await?;
        Ok(entry)
    }

    pub async fn delete_entry(
        &self,
        principal: &Principal,
        id: PortionedEntryId,
    ) -> Result<(), DomainError> {
        let existing = self
            .entries
            .repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::record_not_found("Portioned entry"))?;
        self.entries.authorize(principal, existing.store_id).await?;
        self.entries.repo().delete(id).await
    }
}
