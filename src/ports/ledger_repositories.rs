//! Ports for the ledger kinds: transactions, daily revenues, goals.

use crate::domain::foundation::{DomainError, GoalId, RevenueId, StoreId, TransactionId};
use crate::domain::ledger::{DailyRevenue, Month, StoreGoal, Transaction, TransactionView};
use async_trait::async_trait;

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// All of a store's transactions, date descending then creation
    /// order descending, with group and supplier names joined in.
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<TransactionView>, DomainError>;

    async fn insert(&self, transaction: &Transaction) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, DomainError>;

    async fn update(&self, transaction: &Transaction) -> Result<(), DomainError>;

    async fn delete(&self, id: TransactionId) -> Result<(), DomainError>;
}

#[async_trait]
pub trait RevenueRepository: Send + Sync {
    /// All of a store's daily revenues, date descending.
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<DailyRevenue>, DomainError>;

    /// Insert-or-update on (store_id, date). On conflict the existing
    /// row keeps its id and takes the new amounts; the surviving row
    /// is returned.
    async fn upsert(&self, revenue: &DailyRevenue) -> Result<DailyRevenue, DomainError>;

    async fn find_by_id(&self, id: RevenueId) -> Result<Option<DailyRevenue>, DomainError>;

    async fn delete(&self, id: RevenueId) -> Result<(), DomainError>;
}

#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// All of a store's goals, month descending.
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<StoreGoal>, DomainError>;

    /// Insert-or-update on (store_id, month); same conflict semantics
    /// as revenue upsert.
    async fn upsert(&self, goal: &StoreGoal) -> Result<StoreGoal, DomainError>;

    async fn find_by_id(&self, id: GoalId) -> Result<Option<StoreGoal>, DomainError>;

    async fn find_by_month(
        &self,
        store_id: StoreId,
        month: &Month,
    ) -> Result<Option<StoreGoal>, DomainError>;

    async fn delete(&self, id: GoalId) -> Result<(), DomainError>;
}
