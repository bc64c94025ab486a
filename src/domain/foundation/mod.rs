//! Shared building blocks for the domain layer: typed ids, the error
//! taxonomy, and the authenticated principal.

mod errors;
mod ids;
mod principal;

pub use errors::{DomainError, ErrorCode};
pub use ids::{
    GoalId, GroupId, PortionedEntryId, PortionedProductId, RevenueId, StoreId, SupplierId,
    TransactionId, UserId,
};
pub use principal::{AuthError, Principal, Role};
