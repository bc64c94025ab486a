//! Application layer: store-scoped services combining the access
//! gate, domain validation, and the repository ports.

mod access;
mod catalog;
mod dashboard;
mod identity;
mod ledger;
mod portioning;
mod scoped;
mod stores;

pub use access::{AccessService, ToggleAction, ToggleOutcome};
pub use catalog::{GroupService, SupplierService};
pub use dashboard::DashboardService;
pub use identity::{IdentityService, LoginOutcome};
pub use ledger::{GoalService, GoalTargets, RevenueAmounts, RevenueService, TransactionService};
pub use portioning::PortioningService;
pub use scoped::StoreScoped;
pub use stores::StoreService;

use std::sync::Arc;

use crate::ports::{
    AccessRegistry, GoalRepository, GroupRepository, PortionedEntryRepository,
    PortionedProductRepository, RevenueRepository, StoreAccessGate, StoreRepository,
    SupplierRepository, TransactionRepository, UserRepository,
};

/// One bundle of every storage-side port. Backend modules provide
/// constructors for it; the HTTP layer turns it into services.
#[derive(Clone)]
pub struct ServicePorts {
    pub gate: Arc<dyn StoreAccessGate>,
    pub users: Arc<dyn UserRepository>,
    pub stores: Arc<dyn StoreRepository>,
    pub registry: Arc<dyn AccessRegistry>,
    pub transactions: Arc<dyn TransactionRepository>,
    pub revenues: Arc<dyn RevenueRepository>,
    pub goals: Arc<dyn GoalRepository>,
    pub suppliers: Arc<dyn SupplierRepository>,
    pub groups: Arc<dyn GroupRepository>,
    pub portioned_products: Arc<dyn PortionedProductRepository>,
    pub portioned_entries: Arc<dyn PortionedEntryRepository>,
}
