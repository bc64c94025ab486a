//! HTTP handlers for suppliers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::{ApiResult, MessageResponse};
use crate::adapters::http::middleware::RequirePrincipal;
use crate::adapters::http::AppState;
use crate::domain::foundation::{StoreId, SupplierId};

use super::dto::{CreateSupplierRequest, SupplierResponse, UpdateSupplierRequest};

/// GET /api/suppliers/store/{storeId}
pub async fn list_suppliers(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(store_id): Path<StoreId>,
) -> ApiResult<Json<Vec<SupplierResponse>>> {
    let rows = state.suppliers.list(&principal, store_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// POST /api/suppliers
pub async fn create_supplier(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(req): Json<CreateSupplierRequest>,
) -> ApiResult<(StatusCode, Json<SupplierResponse>)> {
    let store_id = req.store_id;
    let created = state
        .suppliers
        .create(&principal, store_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /api/suppliers/{id}
pub async fn update_supplier(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<SupplierId>,
    Json(req): Json<UpdateSupplierRequest>,
) -> ApiResult<Json<SupplierResponse>> {
    let updated = state.suppliers.update(&principal, id, req.into()).await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/suppliers/{id}
pub async fn delete_supplier(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<SupplierId>,
) -> ApiResult<Json<MessageResponse>> {
    state.suppliers.delete(&principal, id).await?;
    Ok(Json(MessageResponse::new("Supplier deleted")))
}
