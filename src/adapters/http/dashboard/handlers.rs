//! HTTP handler for the dashboard monthly summary.

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::adapters::http::error::ApiResult;
use crate::adapters::http::middleware::RequirePrincipal;
use crate::adapters::http::AppState;
use crate::domain::foundation::StoreId;
use crate::domain::ledger::Month;

use super::dto::{SummaryQuery, SummaryResponse};

/// GET /api/dashboard/store/{storeId}/summary?month=YYYY-MM
pub async fn monthly_summary(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(store_id): Path<StoreId>,
    Query(query): Query<SummaryQuery>,
) -> ApiResult<Json<SummaryResponse>> {
    let month = Month::parse(&query.month)?;
    let summary = state
        .dashboard
        .monthly_summary(&principal, store_id, &month)
        .await?;
    Ok(Json(summary.into()))
}
