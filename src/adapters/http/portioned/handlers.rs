//! HTTP handlers for portioned products and their entries.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::{ApiResult, MessageResponse};
use crate::adapters::http::middleware::RequirePrincipal;
use crate::adapters::http::AppState;
use crate::domain::foundation::{PortionedEntryId, PortionedProductId, StoreId};

use super::dto::{
    CreatePortionedEntryRequest, CreatePortionedProductRequest, PortionedEntryResponse,
    PortionedProductResponse,
};

/// GET /api/portioned-products/store/{storeId}
pub async fn list_products(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(store_id): Path<StoreId>,
) -> ApiResult<Json<Vec<PortionedProductResponse>>> {
    let rows = state.portioning.list_products(&principal, store_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// POST /api/portioned-products
pub async fn create_product(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(req): Json<CreatePortionedProductRequest>,
) -> ApiResult<(StatusCode, Json<PortionedProductResponse>)> {
    let store_id = req.store_id;
    let created = state
        .portioning
        .create_product(&principal, store_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// DELETE /api/portioned-products/{id} — entries go with the product.
pub async fn delete_product(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<PortionedProductId>,
) -> ApiResult<Json<MessageResponse>> {
    state.portioning.delete_product(&principal, id).await?;
    Ok(Json(MessageResponse::new("Portioned product deleted")))
}

/// GET /api/portioned-entries/store/{storeId}
pub async fn list_entries(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(store_id): Path<StoreId>,
) -> ApiResult<Json<Vec<PortionedEntryResponse>>> {
    let rows = state.portioning.list_entries(&principal, store_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// POST /api/portioned-entries
pub async fn create_entry(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(req): Json<CreatePortionedEntryRequest>,
) -> ApiResult<(StatusCode, Json<PortionedEntryResponse>)> {
    let store_id = req.store_id;
    let created = state
        .portioning
        .create_entry(&principal, store_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// DELETE /api/portioned-entries/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<PortionedEntryId>,
) -> ApiResult<Json<MessageResponse>> {
    state.portioning.delete_entry(&principal, id).await?;
    Ok(Json(MessageResponse::new("Portioned entry deleted")))
}
