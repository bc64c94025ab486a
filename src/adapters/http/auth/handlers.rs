//! HTTP handlers for registration and login. These are the only
//! unauthenticated API endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::adapters::http::error::ApiResult;
use crate::adapters::http::users::dto::UserResponse;
use crate::adapters::http::AppState;

use super::dto::{LoginRequest, LoginResponse, RegisterRequest};

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .identity
        .register(&req.username, &req.password, &req.name)
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let outcome = state.identity.login(&req.username, &req.password).await?;
    Ok(Json(outcome.into()))
}
