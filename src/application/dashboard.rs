//! Dashboard reads: gate, fetch, compute. The arithmetic itself lives
//! in `domain::metrics`; this service only authorizes and assembles
//! the inputs. Nothing is cached — every call recomputes.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Principal, StoreId};
use crate::domain::ledger::{Month, Transaction};
use crate::domain::metrics::{monthly_summary, MonthlySummary};
use crate::ports::{GoalRepository, RevenueRepository, StoreAccessGate, TransactionRepository};

pub struct DashboardService {
    gate: Arc<dyn StoreAccessGate>,
    revenues: Arc<dyn RevenueRepository>,
    transactions: Arc<dyn TransactionRepository>,
    goals: Arc<dyn GoalRepository>,
}

impl DashboardService {
    pub fn new(
        gate: Arc<dyn StoreAccessGate>,
        revenues: Arc<dyn RevenueRepository>,
        transactions: Arc<dyn TransactionRepository>,
        goals: Arc<dyn GoalRepository>,
    ) -> Self {
        Self {
            gate,
            revenues,
            transactions,
            goals,
        }
    }

    pub async fn monthly_summary(
        &self,
        principal: &Principal,
        store_id: StoreId,
        month: &Month,
    ) -> Result<MonthlySummary, DomainError> {
        self.gate.allows(principal, store_id).await?.into_result()?;

        let revenues = self.revenues.list_by_store(store_id).await?;
        let transactions: Vec<Transaction> = self
            .transactions
            .list_by_store(store_id)
            .await?
            .into_iter()
            .map(|v| v.record)
            .collect();
        let goal = self.goals.find_by_month(store_id, month).await?;

        Ok(monthly_summary(month, &revenues, &transactions, goal.as_ref()))
    }
}
