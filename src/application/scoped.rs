//! The gate-then-operate wrapper shared by every store-scoped service.
//!
//! The original system repeated an owner-or-grant join inline in every
//! route; here the check exists once, in front of whichever repository
//! the wrapper holds. No operation may touch the repository before
//! `authorize` has passed.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Principal, StoreId};
use crate::ports::StoreAccessGate;

pub struct StoreScoped<R: ?Sized> {
    gate: Arc<dyn StoreAccessGate>,
    repo: Arc<R>,
}

impl<R: ?Sized> StoreScoped<R> {
    pub fn new(gate: Arc<dyn StoreAccessGate>, repo: Arc<R>) -> Self {
        Self { gate, repo }
    }

    /// Fails with the uniform forbidden error unless the principal may
    /// touch the store. Evaluated fresh on every call.
    pub async fn authorize(
        &self,
        principal: &Principal,
        store_id: StoreId,
    ) -> Result<(), DomainError> {
        self.gate.allows(principal, store_id).await?.into_result()
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }
}

impl<R: ?Sized> Clone for StoreScoped<R> {
    fn clone(&self) -> Self {
        Self {
            gate: Arc::clone(&self.gate),
            repo: Arc::clone(&self.repo),
        }
    }
}
