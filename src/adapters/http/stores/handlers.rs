//! HTTP handlers for stores.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::{ApiResult, MessageResponse};
use crate::adapters::http::middleware::RequirePrincipal;
use crate::adapters::http::AppState;
use crate::domain::foundation::StoreId;

use super::dto::{CreateStoreRequest, StoreResponse, UpdateStoreRequest};

/// GET /api/stores — stores visible to the principal.
pub async fn list_stores(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
) -> ApiResult<Json<Vec<StoreResponse>>> {
    let stores = state.stores.list(&principal).await?;
    Ok(Json(stores.into_iter().map(Into::into).collect()))
}

/// POST /api/stores — create with the principal as owner.
pub async fn create_store(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(req): Json<CreateStoreRequest>,
) -> ApiResult<(StatusCode, Json<StoreResponse>)> {
    let store = state.stores.create(&principal, &req.name).await?;
    Ok((StatusCode::CREATED, Json(store.into())))
}

/// GET /api/stores/{id}
pub async fn get_store(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<StoreId>,
) -> ApiResult<Json<StoreResponse>> {
    let store = state.stores.get(&principal, id).await?;
    Ok(Json(store.into()))
}

/// PUT /api/stores/{id} — rename, owner only.
pub async fn update_store(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<StoreId>,
    Json(req): Json<UpdateStoreRequest>,
) -> ApiResult<Json<StoreResponse>> {
    let store = state.stores.rename(&principal, id, &req.name).await?;
    Ok(Json(store.into()))
}

/// DELETE /api/stores/{id} — owner only, cascades all children.
pub async fn delete_store(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<StoreId>,
) -> ApiResult<Json<MessageResponse>> {
    state.stores.delete(&principal, id).await?;
    Ok(Json(MessageResponse::new("Store deleted")))
}
