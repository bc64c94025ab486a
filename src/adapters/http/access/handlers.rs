//! HTTP handlers for the user-store access registry. Master only.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;

use crate::adapters::http::error::ApiResult;
use crate::adapters::http::middleware::RequirePrincipal;
use crate::adapters::http::AppState;
use crate::domain::foundation::{StoreId, UserId};

use super::dto::{ToggleAccessRequest, ToggleAccessResponse};

/// GET /api/user-store-access — the full grant set as
/// `{ userId: [storeId, ...] }`.
pub async fn list_access(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
) -> ApiResult<Json<HashMap<UserId, Vec<StoreId>>>> {
    let grants = state.access.list(&principal).await?;
    Ok(Json(grants))
}

/// POST /api/user-store-access/toggle — flip one grant.
pub async fn toggle_access(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(req): Json<ToggleAccessRequest>,
) -> ApiResult<Json<ToggleAccessResponse>> {
    let outcome = state
        .access
        .toggle(&principal, req.user_id, req.store_id)
        .await?;
    Ok(Json(outcome.into()))
}
