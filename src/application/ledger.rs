//! Ledger services: transactions, daily revenues, monthly goals.
//!
//! Shapes per kind: transactions are full CRUD; revenues and goals are
//! upsert kinds keyed by (store, date) and (store, month). Everything
//! passes the access gate before the repository is touched; update and
//! delete resolve the owning store from the existing row first.

use chrono::{NaiveDate, Utc};

use crate::domain::foundation::{
    DomainError, GoalId, Principal, RevenueId, StoreId, TransactionId,
};
use crate::domain::ledger::{
    DailyRevenue, Month, StoreGoal, Transaction, TransactionDraft, TransactionView,
};
use crate::ports::{GoalRepository, RevenueRepository, TransactionRepository};

use super::scoped::StoreScoped;

// ════════════════════════════════════════════════════════════════════════════
// Transactions
// ════════════════════════════════════════════════════════════════════════════

pub struct TransactionService {
    inner: StoreScoped<dyn TransactionRepository>,
}

impl TransactionService {
    pub fn new(inner: StoreScoped<dyn TransactionRepository>) -> Self {
        Self { inner }
    }

    pub async fn list(
        &self,
        principal: &Principal,
        store_id: StoreId,
    ) -> Result<Vec<TransactionView>, DomainError> {
        self.inner.authorize(principal, store_id).await?;
        self.inner.repo().list_by_store(store_id).await
    }

    pub async fn create(
        &self,
        principal: &Principal,
        store_id: StoreId,
        draft: TransactionDraft,
    ) -> Result<Transaction, DomainError> {
        self.inner.authorize(principal, store_id).await?;
        let transaction = draft.into_transaction(store_id, Utc::now())?;
        self.inner.repo().insert(&transaction).await?;
        Ok(transaction)
    }

    pub async fn update(
        &self,
        principal: &Principal,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> Result<Transaction, DomainError> {
        let mut existing = self
            .inner
            .repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::record_not_found("Transaction"))?;
        self.inner.authorize(principal, existing.store_id).await?;

        draft.apply_to(&mut existing)?;
        self.inner.repo().update(&existing).await?;
        Ok(existing)
    }

    pub async fn delete(
        &self,
        principal: &Principal,
        id: TransactionId,
    ) -> Result<(), DomainError> {
        let existing = self
            .inner
            .repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::record_not_found("Transaction"))?;
        self.inner.authorize(principal, existing.store_id).await?;
        self.inner.repo().delete(id).await
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Daily revenues
// ════════════════════════════════════════════════════════════════════════════

/// The three client-supplied revenue components. A client-sent total
/// never reaches this type — it is dropped at the DTO boundary.
#[derive(Debug, Clone, Copy)]
pub struct RevenueAmounts {
    pub salon: f64,
    pub delivery: f64,
    pub service_charge: f64,
}

pub struct RevenueService {
    inner: StoreScoped<dyn RevenueRepository>,
}

impl RevenueService {
    pub fn new(inner: StoreScoped<dyn RevenueRepository>) -> Self {
        Self { inner }
    }

    pub async fn list(
        &self,
        principal: &Principal,
        store_id: StoreId,
    ) -> Result<Vec<DailyRevenue>, DomainError> {
        self.inner.authorize(principal, store_id).await?;
        self.inner.repo().list_by_store(store_id).await
    }

    /// Creates or overwrites the revenue row for (store, date).
    pub async fn upsert(
        &self,
        principal: &Principal,
        store_id: StoreId,
        date: NaiveDate,
        amounts: RevenueAmounts,
    ) -> Result<DailyRevenue, DomainError> {
        self.inner.authorize(principal, store_id).await?;
        let revenue = DailyRevenue::compose(
            store_id,
            date,
            amounts.salon,
            amounts.delivery,
            amounts.service_charge,
            Utc::now(),
        )?;
        self.inner.repo().upsert(&revenue).await
    }

    pub async fn delete(&self, principal: &Principal, id: RevenueId) -> Result<(), DomainError> {
        let existing = self
            .inner
            .repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::record_not_found("Daily revenue"))?;
        self.inner.authorize(principal, existing.store_id).await?;
        self.inner.repo().delete(id).await
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Goals
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy)]
pub struct GoalTargets {
    pub revenue_target: f64,
    pub cmc_target: f64,
    pub avg_ticket: f64,
}

pub struct GoalService {
    inner: StoreScoped<dyn GoalRepository>,
}

impl GoalService {
    pub fn new(inner: StoreScoped<dyn GoalRepository>) -> Self {
        Self { inner }
    }

    pub async fn list(
        &self,
        principal: &Principal,
        store_id: StoreId,
    ) -> Result<Vec<StoreGoal>, DomainError> {
        self.inner.authorize(principal, store_id).await?;
        self.inner.repo().list_by_store(store_id).await
    }

    /// Creates or overwrites the goal row for (store, month).
    pub async fn upsert(
        &self,
        principal: &Principal,
        store_id: StoreId,
        month: Month,
        targets: GoalTargets,
    ) -> Result<StoreGoal, DomainError> {
        self.inner.authorize(principal, store_id).await?;
        let goal = StoreGoal::compose(
            store_id,
            month,
            targets.revenue_target,
            targets.cmc_target,
            targets.avg_ticket,
            Utc::now(),
        );
        self.inner.repo().upsert(&goal).await
    }

    pub async fn delete(&self, principal: &Principal, id: GoalId) -> Result<(), DomainError> {
        let existing = self
            .inner
            .repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::record_not_found("Goal"))?;
        self.inner.authorize(principal, existing.store_id).await?;
        self.inner.repo().delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryBackend;
    use crate::domain::foundation::{ErrorCode, GroupId, Role, UserId};
    use crate::domain::ledger::TransactionType;
    use crate::domain::store::Store;
    use crate::ports::StoreRepository;
    use std::sync::Arc;

    struct Fixture {
        backend: MemoryBackend,
        transactions: TransactionService,
        revenues: RevenueService,
        goals: GoalService,
        owner: Principal,
        store: Store,
    }

    async fn fixture() -> Fixture {
        let backend = MemoryBackend::new();
        let gate: Arc<dyn crate::ports::StoreAccessGate> = Arc::new(backend.clone());

        let owner = Principal::new(UserId::new(), "ana", Role::User);
        let store = Store::create(owner.id, "Paris6", Utc::now()).unwrap();
        StoreRepository::create(&backend, &store).await.unwrap();

        Fixture {
            transactions: TransactionService::new(StoreScoped::new(
                gate.clone(),
                Arc::new(backend.clone()),
            )),
            revenues: RevenueService::new(StoreScoped::new(
                gate.clone(),
                Arc::new(backend.clone()),
            )),
            goals: GoalService::new(StoreScoped::new(gate.clone(), Arc::new(backend.clone()))),
            backend,
            owner,
            store,
        }
    }

    fn stranger() -> Principal {
        Principal::new(UserId::new(), "bia", Role::User)
    }

    fn draft(amount: f64, date: &str) -> TransactionDraft {
        TransactionDraft {
            kind: TransactionType::Purchase,
            description: "Beef".to_string(),
            amount,
            date: date.parse().unwrap(),
            due_date: None,
            group_id: Some(GroupId::new()),
            supplier_id: None,
            invoice_number: None,
        }
    }

    #[tokio::test]
    async fn stranger_gets_forbidden_not_partial_results() {
        let f = fixture().await;
        let bia = stranger();

        let list = f.transactions.list(&bia, f.store.id).await.unwrap_err();
        assert_eq!(list.code, ErrorCode::Forbidden);

        let create = f
            .transactions
            .create(&bia, f.store.id, draft(10.0, "2024-05-01"))
            .await
            .unwrap_err();
        assert_eq!(create.code, ErrorCode::Forbidden);

        // Nothing was written.
        let rows = f
            .transactions
            .list(&f.owner, f.store.id)
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn update_resolves_store_then_gates() {
        let f = fixture().await;

        let created = f
            .transactions
            .create(&f.owner, f.store.id, draft(10.0, "2024-05-01"))
            .await
            .unwrap();

        // Stranger editing an existing row: forbidden.
        let err = f
            .transactions
            .update(&stranger(), created.id, draft(99.0, "2024-05-01"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);

        // Dead id: not found, even for the owner.
        let err = f
            .transactions
            .update(&f.owner, TransactionId::new(), draft(99.0, "2024-05-01"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RecordNotFound);
    }

    #[tokio::test]
    async fn transactions_list_newest_date_first() {
        let f = fixture().await;
        for date in ["2024-05-01", "2024-05-03", "2024-05-02"] {
            f.transactions
                .create(&f.owner, f.store.id, draft(10.0, date))
                .await
                .unwrap();
        }

        let rows = f.transactions.list(&f.owner, f.store.id).await.unwrap();
        let dates: Vec<String> = rows
            .iter()
            .map(|v| v.record.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-05-03", "2024-05-02", "2024-05-01"]);
    }

    #[tokio::test]
    async fn revenue_upsert_is_last_write_wins() {
        let f = fixture().await;
        let date: NaiveDate = "2024-05-01".parse().unwrap();

        f.revenues
            .upsert(
                &f.owner,
                f.store.id,
                date,
                RevenueAmounts {
                    salon: 500.0,
                    delivery: 200.0,
                    service_charge: 70.0,
                },
            )
            .await
            .unwrap();

        let second = f
            .revenues
            .upsert(
                &f.owner,
                f.store.id,
                date,
                RevenueAmounts {
                    salon: 300.0,
                    delivery: 100.0,
                    service_charge: 0.0,
                },
            )
            .await
            .unwrap();
        assert_eq!(second.total, 400.0);

        let rows = f.revenues.list(&f.owner, f.store.id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total, 400.0);
    }

    #[tokio::test]
    async fn goal_upsert_overwrites_by_month() {
        let f = fixture().await;
        let month = Month::parse("2024-05").unwrap();

        f.goals
            .upsert(
                &f.owner,
                f.store.id,
                month.clone(),
                GoalTargets {
                    revenue_target: 1000.0,
                    cmc_target: 30.0,
                    avg_ticket: 80.0,
                },
            )
            .await
            .unwrap();

        let updated = f
            .goals
            .upsert(
                &f.owner,
                f.store.id,
                month,
                GoalTargets {
                    revenue_target: 2000.0,
                    cmc_target: 28.0,
                    avg_ticket: 90.0,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.revenue_target, 2000.0);

        let rows = f.goals.list(&f.owner, f.store.id).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn grant_revocation_cuts_access_immediately() {
        let f = fixture().await;
        let bia = stranger();

        crate::ports::AccessRegistry::insert(&f.backend, bia.id, f.store.id)
            .await
            .unwrap();
        assert!(f.revenues.list(&bia, f.store.id).await.is_ok());

        crate::ports::AccessRegistry::remove(&f.backend, bia.id, f.store.id)
            .await
            .unwrap();
        let err = f.revenues.list(&bia, f.store.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }
}
