//! HTTP handlers for daily revenues.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::{ApiResult, MessageResponse};
use crate::adapters::http::middleware::RequirePrincipal;
use crate::adapters::http::AppState;
use crate::domain::foundation::{RevenueId, StoreId};

use super::dto::{RevenueResponse, UpsertRevenueRequest};

/// GET /api/daily-revenues/store/{storeId}
pub async fn list_revenues(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(store_id): Path<StoreId>,
) -> ApiResult<Json<Vec<RevenueResponse>>> {
    let rows = state.revenues.list(&principal, store_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// POST /api/daily-revenues — upsert on (store, date).
pub async fn upsert_revenue(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(req): Json<UpsertRevenueRequest>,
) -> ApiResult<(StatusCode, Json<RevenueResponse>)> {
    let revenue = state
        .revenues
        .upsert(&principal, req.store_id, req.date, req.amounts())
        .await?;
    Ok((StatusCode::CREATED, Json(revenue.into())))
}

/// DELETE /api/daily-revenues/{id}
pub async fn delete_revenue(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<RevenueId>,
) -> ApiResult<Json<MessageResponse>> {
    state.revenues.delete(&principal, id).await?;
    Ok(Json(MessageResponse::new("Daily revenue deleted")))
}
