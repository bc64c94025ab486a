//! The user-store access registry: master-only grant management.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode, Principal, StoreId, UserId};
use crate::ports::AccessRegistry;

/// What a toggle call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Added,
    Removed,
}

#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub action: ToggleAction,
    pub user_id: UserId,
    pub store_id: StoreId,
}

pub struct AccessService {
    registry: Arc<dyn AccessRegistry>,
}

impl AccessService {
    pub fn new(registry: Arc<dyn AccessRegistry>) -> Self {
        Self { registry }
    }

    /// The full grant set, grouped by user. Master only.
    pub async fn list(
        &self,
        principal: &Principal,
    ) -> Result<HashMap<UserId, Vec<StoreId>>, DomainError> {
        require_master(principal)?;

        let mut by_user: HashMap<UserId, Vec<StoreId>> = HashMap::new();
        for (user_id, store_id) in self.registry.list_all().await? {
            by_user.entry(user_id).or_default().push(store_id);
        }
        Ok(by_user)
    }

    /// Flips one grant: removes it when present, inserts it otherwise.
    /// Master only. Two toggles restore the original state.
    pub async fn toggle(
        &self,
        principal: &Principal,
        user_id: UserId,
        store_id: StoreId,
    ) -> Result<ToggleOutcome, DomainError> {
        require_master(principal)?;

        let action = if self.registry.contains(user_id, store_id).await? {
            self.registry.remove(user_id, store_id).await?;
            ToggleAction::Removed
        } else {
            self.registry.insert(user_id, store_id).await?;
            ToggleAction::Added
        };

        tracing::info!(user = %user_id, store = %store_id, ?action, "store access toggled");
        Ok(ToggleOutcome {
            action,
            user_id,
            store_id,
        })
    }
}

fn require_master(principal: &Principal) -> Result<(), DomainError> {
    if principal.is_master() {
        Ok(())
    } else {
        Err(DomainError::new(ErrorCode::Forbidden, "Access denied"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryBackend;
    use crate::domain::foundation::Role;

    fn service() -> AccessService {
        AccessService::new(Arc::new(MemoryBackend::new()))
    }

    fn master() -> Principal {
        Principal::new(UserId::new(), "thiago", Role::Master)
    }

    fn regular() -> Principal {
        Principal::new(UserId::new(), "ana", Role::User)
    }

    #[tokio::test]
    async fn toggle_twice_restores_original_state() {
        let svc = service();
        let m = master();
        let user_id = UserId::new();
        let store_id = StoreId::new();

        let first = svc.toggle(&m, user_id, store_id).await.unwrap();
        assert_eq!(first.action, ToggleAction::Added);

        let second = svc.toggle(&m, user_id, store_id).await.unwrap();
        assert_eq!(second.action, ToggleAction::Removed);

        assert!(svc.list(&m).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_groups_grants_by_user() {
        let svc = service();
        let m = master();
        let ana = UserId::new();
        let store_a = StoreId::new();
        let store_b = StoreId::new();

        svc.toggle(&m, ana, store_a).await.unwrap();
        svc.toggle(&m, ana, store_b).await.unwrap();

        let grants = svc.list(&m).await.unwrap();
        let ana_stores = grants.get(&ana).unwrap();
        assert_eq!(ana_stores.len(), 2);
        assert!(ana_stores.contains(&store_a));
        assert!(ana_stores.contains(&store_b));
    }

    #[tokio::test]
    async fn non_master_is_rejected() {
        let svc = service();
        let r = regular();

        assert!(svc.list(&r).await.is_err());
        assert!(svc
            .toggle(&r, UserId::new(), StoreId::new())
            .await
            .is_err());
    }
}
