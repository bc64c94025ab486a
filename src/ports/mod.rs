//! Ports: the trait seams between the application core and the
//! outside world. Adapters implement these; services consume them.

mod access_gate;
mod access_registry;
mod catalog_repositories;
mod ledger_repositories;
mod password_hasher;
mod portioning_repositories;
mod store_repository;
mod token_service;
mod user_repository;

pub use access_gate::{AccessDecision, StoreAccessGate};
pub use access_registry::AccessRegistry;
pub use catalog_repositories::{GroupRepository, SupplierRepository};
pub use ledger_repositories::{GoalRepository, RevenueRepository, TransactionRepository};
pub use password_hasher::PasswordHasher;
pub use portioning_repositories::{PortionedEntryRepository, PortionedProductRepository};
pub use store_repository::StoreRepository;
pub use token_service::TokenService;
pub use user_repository::UserRepository;
