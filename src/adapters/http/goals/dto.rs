//! HTTP DTOs for monthly goals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::GoalTargets;
use crate::domain::foundation::{GoalId, StoreId};
use crate::domain::ledger::StoreGoal;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertGoalRequest {
    pub store_id: StoreId,
    /// Target month as `YYYY-MM`; validated server-side.
    pub month: String,
    #[serde(default)]
    pub revenue_target: f64,
    #[serde(default)]
    pub cmc_target: f64,
    #[serde(default)]
    pub avg_ticket: f64,
}

impl UpsertGoalRequest {
    pub fn targets(&self) -> GoalTargets {
        GoalTargets {
            revenue_target: self.revenue_target,
            cmc_target: self.cmc_target,
            avg_ticket: self.avg_ticket,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponse {
    pub id: GoalId,
    pub store_id: StoreId,
    pub month: String,
    pub revenue_target: f64,
    pub cmc_target: f64,
    pub avg_ticket: f64,
    pub created_at: DateTime<Utc>,
}

impl From<StoreGoal> for GoalResponse {
    fn from(g: StoreGoal) -> Self {
        Self {
            id: g.id,
            store_id: g.store_id,
            month: g.month.to_string(),
            revenue_target: g.revenue_target,
            cmc_target: g.cmc_target,
            avg_ticket: g.avg_ticket,
            created_at: g.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_default_to_zero() {
        let req: UpsertGoalRequest = serde_json::from_str(
            r#"{"storeId":"550e8400-e29b-41d4-a716-446655440000","month":"2024-05"}"#,
        )
        .unwrap();
        assert_eq!(req.revenue_target, 0.0);
        assert_eq!(req.cmc_target, 0.0);
        assert_eq!(req.avg_ticket, 0.0);
    }
}
