//! HTTP handlers for transactions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::{ApiResult, MessageResponse};
use crate::adapters::http::middleware::RequirePrincipal;
use crate::adapters::http::AppState;
use crate::domain::foundation::{StoreId, TransactionId};

use super::dto::{CreateTransactionRequest, TransactionResponse, UpdateTransactionRequest};

/// GET /api/transactions/store/{storeId}
pub async fn list_transactions(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(store_id): Path<StoreId>,
) -> ApiResult<Json<Vec<TransactionResponse>>> {
    let rows = state.transactions.list(&principal, store_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// POST /api/transactions
pub async fn create_transaction(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Json(req): Json<CreateTransactionRequest>,
) -> ApiResult<(StatusCode, Json<TransactionResponse>)> {
    let store_id = req.store_id;
    let created = state
        .transactions
        .create(&principal, store_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /api/transactions/{id}
pub async fn update_transaction(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<TransactionId>,
    Json(req): Json<UpdateTransactionRequest>,
) -> ApiResult<Json<TransactionResponse>> {
    let updated = state
        .transactions
        .update(&principal, id, req.into())
        .await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/transactions/{id}
pub async fn delete_transaction(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<TransactionId>,
) -> ApiResult<Json<MessageResponse>> {
    state.transactions.delete(&principal, id).await?;
    Ok(Json(MessageResponse::new("Transaction deleted")))
}
