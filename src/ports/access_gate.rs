//! Access control port for store-scoped operations.
//!
//! One predicate gates every read and write of store-scoped data. The
//! gate follows a fail-secure design: on any storage error, access is
//! denied by propagating the error, and a store that does not exist is
//! indistinguishable from one the principal cannot reach.

use crate::domain::foundation::{DomainError, Principal, StoreId};
use async_trait::async_trait;

/// Port for deciding whether a principal may touch a store's data.
///
/// Implementors must not cache decisions: grants are toggled at
/// runtime and every request re-evaluates.
#[async_trait]
pub trait StoreAccessGate: Send + Sync {
    /// Grants when the principal is a master, owns the store, or holds
    /// an access grant for it.
    async fn allows(
        &self,
        principal: &Principal,
        store_id: StoreId,
    ) -> Result<AccessDecision, DomainError>;
}

/// Result of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Denied,
}

impl AccessDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }

    /// Converts a denial into the uniform forbidden error.
    pub fn into_result(self) -> Result<(), DomainError> {
        match self {
            AccessDecision::Granted => Ok(()),
            AccessDecision::Denied => Err(DomainError::forbidden()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn granted_converts_to_ok() {
        assert!(AccessDecision::Granted.into_result().is_ok());
        assert!(AccessDecision::Granted.is_granted());
    }

    #[test]
    fn denied_converts_to_forbidden() {
        let err = AccessDecision::Denied.into_result().unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[test]
    fn gate_is_object_safe() {
        fn _accepts_dyn(_gate: &dyn StoreAccessGate) {}
    }
}
