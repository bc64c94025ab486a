//! Catalog services: suppliers and product groups. Plain store-scoped
//! CRUD behind the gate.

use chrono::Utc;

use crate::domain::catalog::{GroupDraft, ProductGroup, Supplier, SupplierDraft};
use crate::domain::foundation::{DomainError, GroupId, Principal, StoreId, SupplierId};
use crate::ports::{GroupRepository, SupplierRepository};

use super::scoped::StoreScoped;

pub struct SupplierService {
    inner: StoreScoped<dyn SupplierRepository>,
}

impl SupplierService {
    pub fn new(inner: StoreScoped<dyn SupplierRepository>) -> Self {
        Self { inner }
    }

    pub async fn list(
        &self,
        principal: &Principal,
        store_id: StoreId,
    ) -> Result<Vec<Supplier>, DomainError> {
        self.inner.authorize(principal, store_id).await?;
        self.inner.repo().list_by_store(store_id).await
    }

    pub async fn create(
        &self,
        principal: &Principal,
        store_id: StoreId,
        draft: SupplierDraft,
    ) -> Result<Supplier, DomainError> {
        self.inner.authorize(principal, store_id).await?;
        let supplier = draft.into_supplier(store_id, Utc::now())?;
        self.inner.repo().insert(&supplier).await?;
        Ok(supplier)
    }

    pub async fn update(
        &self,
        principal: &Principal,
        id: SupplierId,
        draft: SupplierDraft,
    ) -> Result<Supplier, DomainError> {
        let mut existing = self
            .inner
            .repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::record_not_found("Supplier"))?;
        self.inner.authorize(principal, existing.store_id).await?;

        draft.apply_to(&mut existing)?;
        self.inner.repo().update(&existing).await?;
        Ok(existing)
    }

    pub async fn delete(&self, principal: &Principal, id: SupplierId) -> Result<(), DomainError> {
        let existing = self
            .inner
            .repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::record_not_found("Supplier"))?;
        self.inner.authorize(principal, existing.store_id).await?;
        self.inner.repo().delete(id).await
    }
}

pub struct GroupService {
    inner: StoreScoped<dyn GroupRepository>,
}

impl GroupService {
    pub fn new(inner: StoreScoped<dyn GroupRepository>) -> Self {
        Self { inner }
    }

    pub async fn list(
        &self,
        principal: &Principal,
        store_id: StoreId,
    ) -> Result<Vec<ProductGroup>, DomainError> {
        self.inner.authorize(principal, store_id).await?;
        self.inner.repo().list_by_store(store_id).await
    }

    pub async fn create(
        &self,
        principal: &Principal,
        store_id: StoreId,
        draft: GroupDraft,
    ) -> Result<ProductGroup, DomainError> {
        self.inner.authorize(principal, store_id).await?;
        let group = draft.into_group(store_id, Utc::now())?;
        self.inner.repo().insert(&group).await?;
        Ok(group)
    }

    pub async fn update(
        &self,
        principal: &Principal,
        id: GroupId,
        draft: GroupDraft,
    ) -> Result<ProductGroup, DomainError> {
        let mut existing = self
            .inner
            .repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::record_not_found("Product group"))?;
        self.inner.authorize(principal, existing.store_id).await?;

        draft.apply_to(&mut existing)?;
        self.inner.repo().update(&existing).await?;
        Ok(existing)
    }

    pub async fn delete(&self, principal: &Principal, id: GroupId) -> Result<(), DomainError> {
        let existing = self
            .inner
            .repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::record_not_found("Product group"))?;
        self.inner.authorize(principal, existing.store_id).await?;
        self.inner.repo().delete(id).await
    }
}
