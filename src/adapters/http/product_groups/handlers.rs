//! HTTP handlers for product groups.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::{ApiResult, MessageResponse};
use crate::adapters::http::middleware::RequirePrincipal;
use crate::adapters::http::AppState;
use crate::domain::foundation::{GroupId, StoreId};

use super::dto::{CreateGroupRequest, GroupResponse, UpdateGroupRequest};

/// GET /api/product-groups/store/{storeId}
pub async fn list_groups(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(store_id): Path<StoreId>,
) -> ApiResult<Json<Vec<GroupResponse>>> {
    let rows = state.groups.list(&principal, store_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// POST /api/product-groups
pub async fn create_group(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(req): Json<CreateGroupRequest>,
) -> ApiResult<(StatusCode, Json<GroupResponse>)> {
    let store_id = req.store_id;
    let created = state.groups.create(&principal, store_id, req.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /api/product-groups/{id}
pub async fn update_group(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<GroupId>,
    Json(req): Json<UpdateGroupRequest>,
) -> ApiResult<Json<GroupResponse>> {
    let updated = state.groups.update(&principal, id, req.into()).await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/product-groups/{id}
pub async fn delete_group(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<GroupId>,
) -> ApiResult<Json<MessageResponse>> {
    state.groups.delete(&principal, id).await?;
    Ok(Json(MessageResponse::new("Product group deleted")))
}
