//! HTTP handlers for user administration.

use axum::extract::{Path, State};
use axum::Json;

use crate::adapters::http::error::{ApiResult, MessageResponse};
use crate::adapters::http::middleware::RequirePrincipal;
use crate::adapters::http::AppState;
use crate::domain::foundation::UserId;

use super::dto::{UpdateUserRequest, UserResponse};

/// GET /api/users — all accounts, master only.
pub async fn list_users(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.identity.list_users(&principal).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /api/users/{id} — master or the account itself.
pub async fn get_user(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<UserId>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.identity.get_user(&principal, id).await?;
    Ok(Json(user.into()))
}

/// PUT /api/users/{id} — update name/role, master only.
pub async fn update_user(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<UserId>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .identity
        .update_user(&principal, id, req.name, req.role)
        .await?;
    Ok(Json(user.into()))
}

/// DELETE /api/users/{id} — master only; never yourself, never the
/// last master.
pub async fn delete_user(
    State(state): State<AppState>,
    RequirePrincipal(principal): RequirePrincipal,
    Path(id): Path<UserId>,
) -> ApiResult<Json<MessageResponse>> {
    state.identity.delete_user(&principal, id).await?;
    Ok(Json(MessageResponse::new("User deleted")))
}
