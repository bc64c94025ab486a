//! Stores: independently tracked business units.
//!
//! A store belongs to exactly one owner. Non-owners reach it only
//! through an explicit access grant; masters reach every store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::foundation::{DomainError, StoreId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub owner_id: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Store {
    pub fn create(
        owner_id: UserId,
        name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name", "Store name is required"));
        }
        Ok(Self {
            id: StoreId::new(),
            owner_id,
            name,
            created_at: now,
        })
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_blank_name() {
        assert!(Store::create(UserId::new(), "", Utc::now()).is_err());
        assert!(Store::create(UserId::new(), "   ", Utc::now()).is_err());
    }

    #[test]
    fn owner_check_matches_owner_only() {
        let owner = UserId::new();
        let store = Store::create(owner, "Paris6", Utc::now()).unwrap();
        assert!(store.is_owned_by(owner));
        assert!(!store.is_owned_by(UserId::new()));
    }
}
