//! HTTP DTOs for daily revenues.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::application::RevenueAmounts;
use crate::domain::foundation::{RevenueId, StoreId};
use crate::domain::ledger::DailyRevenue;

/// Upsert payload. A client may send `total`, but it is ignored: the
/// stored total is always recomputed from the three components.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertRevenueRequest {
    pub store_id: StoreId,
    pub date: NaiveDate,
    #[serde(default)]
    pub salon: f64,
    #[serde(default)]
    pub delivery: f64,
    #[serde(default)]
    pub service_charge: f64,
    #[serde(default)]
    pub total: Option<f64>,
}

impl UpsertRevenueRequest {
    pub fn amounts(&self) -> RevenueAmounts {
        RevenueAmounts {
            salon: self.salon,
            delivery: self.delivery,
            service_charge: self.service_charge,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueResponse {
    pub id: RevenueId,
    pub store_id: StoreId,
    pub date: NaiveDate,
    pub salon: f64,
    pub delivery: f64,
    pub service_charge: f64,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

impl From<DailyRevenue> for RevenueResponse {
    fn from(r: DailyRevenue) -> Self {
        Self {
            id: r.id,
            store_id: r.store_id,
            date: r.date,
            salon: r.salon,
            delivery: r.delivery,
            service_charge: r.service_charge,
            total: r.total,
            created_at: r.created_at,
        }
    }
}
