//! Store lifecycle: the one entity kind that is gated by ownership
//! rather than by the access gate alone.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::foundation::{DomainError, Principal, StoreId};
use crate::domain::store::Store;
use crate::ports::{StoreAccessGate, StoreRepository};

pub struct StoreService {
    stores: Arc<dyn StoreRepository>,
    gate: Arc<dyn StoreAccessGate>,
}

impl StoreService {
    pub fn new(stores: Arc<dyn StoreRepository>, gate: Arc<dyn StoreAccessGate>) -> Self {
        Self { stores, gate }
    }

    /// The stores the principal may see, newest first.
    pub async fn list(&self, principal: &Principal) -> Result<Vec<Store>, DomainError> {
        self.stores.list_visible(principal).await
    }

    /// Creates a store with the principal as owner.
    pub async fn create(&self, principal: &Principal, name: &str) -> Result<Store, DomainError> {
        let store = Store::create(principal.id, name, Utc::now())?;
        self.stores.create(&store).await?;
        tracing::info!(store = %store.id, owner = %store.owner_id, "store created");
        Ok(store)
    }

    /// Fetches one store. A missing store and a store the principal
    /// cannot reach are the same forbidden outcome.
    pub async fn get(&self, principal: &Principal, id: StoreId) -> Result<Store, DomainError> {
        self.gate.allows(principal, id).await?.into_result()?;
        self.stores
            .find_by_id(id)
            .await?
            .ok_or_else(DomainError::forbidden)
    }

    /// Renames a store. Ownership is exclusive control: even a grant
    /// holder or a master may not rename someone else's store.
    pub async fn rename(
        &self,
        principal: &Principal,
        id: StoreId,
        name: &str,
    ) -> Result<Store, DomainError> {
        let mut store = self.owned_store(principal, id).await?;
        if name.trim().is_empty() {
            return Err(DomainError::validation("name", "Store name is required"));
        }
        store.name = name.to_string();
        self.stores.update(&store).await?;
        Ok(store)
    }

    /// Deletes a store and cascades all of its children. Owner only.
    pub async fn delete(&self, principal: &Principal, id: StoreId) -> Result<(), DomainError> {
        let store = self.owned_store(principal, id).await?;
        self.stores.delete(store.id).await?;
        tracing::info!(store = %store.id, "store deleted with all children");
        Ok(())
    }

    async fn owned_store(
        &self,
        principal: &Principal,
        id: StoreId,
    ) -> Result<Store, DomainError> {
        let store = self
            .stores
            .find_by_id(id)
            .await?
            .ok_or_else(DomainError::forbidden)?;
        if !store.is_owned_by(principal.id) {
            return Err(DomainError::forbidden());
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryBackend;
    use crate::domain::foundation::{ErrorCode, Role, UserId};
    use crate::ports::AccessRegistry;

    fn service() -> (StoreService, MemoryBackend) {
        let backend = MemoryBackend::new();
        let svc = StoreService::new(Arc::new(backend.clone()), Arc::new(backend.clone()));
        (svc, backend)
    }

    fn user(name: &str) -> Principal {
        Principal::new(UserId::new(), name, Role::User)
    }

    #[tokio::test]
    async fn creator_becomes_owner_and_sees_the_store() {
        let (svc, _) = service();
        let ana = user("ana");

        let store = svc.create(&ana, "Paris6").await.unwrap();
        assert_eq!(store.owner_id, ana.id);

        let listed = svc.list(&ana).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Paris6");
    }

    #[tokio::test]
    async fn get_is_forbidden_for_strangers_and_missing_stores_alike() {
        let (svc, _) = service();
        let ana = user("ana");
        let bia = user("bia");

        let store = svc.create(&ana, "Paris6").await.unwrap();

        let denied = svc.get(&bia, store.id).await.unwrap_err();
        let missing = svc.get(&bia, StoreId::new()).await.unwrap_err();
        assert_eq!(denied.code, ErrorCode::Forbidden);
        assert_eq!(missing.code, ErrorCode::Forbidden);
        assert_eq!(denied.message, missing.message);
    }

    #[tokio::test]
    async fn grant_holder_can_get_but_not_rename_or_delete() {
        let (svc, backend) = service();
        let ana = user("ana");
        let bia = user("bia");

        let store = svc.create(&ana, "Paris6").await.unwrap();
        AccessRegistry::insert(&backend, bia.id, store.id)
            .await
            .unwrap();

        assert!(svc.get(&bia, store.id).await.is_ok());
        assert_eq!(
            svc.rename(&bia, store.id, "Lyon2").await.unwrap_err().code,
            ErrorCode::Forbidden
        );
        assert_eq!(
            svc.delete(&bia, store.id).await.unwrap_err().code,
            ErrorCode::Forbidden
        );
    }

    #[tokio::test]
    async fn owner_renames_and_deletes() {
        let (svc, _) = service();
        let ana = user("ana");

        let store = svc.create(&ana, "Paris6").await.unwrap();
        let renamed = svc.rename(&ana, store.id, "Lyon2").await.unwrap();
        assert_eq!(renamed.name, "Lyon2");

        svc.delete(&ana, store.id).await.unwrap();
        assert!(svc.list(&ana).await.unwrap().is_empty());
    }
}
