//! HTTP DTOs for the dashboard summary.

use serde::{Deserialize, Serialize};

use crate::domain::metrics::MonthlySummary;

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryQuery {
    /// Target month as `YYYY-MM`.
    pub month: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub monthly_revenue: f64,
    pub monthly_purchases: f64,
    pub cmc: f64,
    pub goal_progress: f64,
}

impl From<MonthlySummary> for SummaryResponse {
    fn from(s: MonthlySummary) -> Self {
        Self {
            monthly_revenue: s.monthly_revenue,
            monthly_purchases: s.monthly_purchases,
            cmc: s.cmc,
            goal_progress: s.goal_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_response_uses_camel_case() {
        let summary = MonthlySummary {
            monthly_revenue: 1000.0,
            monthly_purchases: 300.0,
            cmc: 30.0,
            goal_progress: 50.0,
        };
        let json = serde_json::to_string(&SummaryResponse::from(summary)).unwrap();
        assert!(json.contains("monthlyRevenue"));
        assert!(json.contains("goalProgress"));
    }
}
