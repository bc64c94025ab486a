//! HTTP handlers for monthly goals.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::{ApiResult, MessageResponse};
use crate::adapters::http::middleware::RequirePrincipal;
use crate::adapters::http::AppState;
use crate::domain::foundation::{GoalId, StoreId};
use crate::domain::ledger::Month;

use super::dto::{GoalResponse, UpsertGoalRequest};

/// GET /api/goals/store/{storeId}
pub async fn list_goals(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(store_id): Path<StoreId>,
) -> ApiResult<Json<Vec<GoalResponse>>> {
    let rows = state.goals.list(&principal, store_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// POST /api/goals — upsert on (store, month).
pub async fn upsert_goal(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(req): Json<UpsertGoalRequest>,
) -> ApiResult<(StatusCode, Json<GoalResponse>)> {
    let month = Month::parse(&req.month)?;
    let goal = state
        .goals
        .upsert(&principal, req.store_id, month, req.targets())
        .await?;
    Ok((StatusCode::CREATED, Json(goal.into())))
}

/// DELETE /api/goals/{id}
pub async fn delete_goal(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<GoalId>,
) -> ApiResult<Json<MessageResponse>> {
    state.goals.delete(&principal, id).await?;
    Ok(Json(MessageResponse::new("Goal deleted")))
}
