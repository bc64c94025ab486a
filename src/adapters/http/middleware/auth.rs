//! Authentication middleware and extractor.
//!
//! The middleware validates `Authorization: Bearer <token>` through
//! the `TokenService` port and injects the decoded `Principal` into
//! request extensions. Handlers opt in with the `RequirePrincipal`
//! extractor; routes reached without a valid token get 401 there.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use http::header::AUTHORIZATION;

use crate::domain::foundation::{AuthError, Principal};
use crate::ports::TokenService;

use super::super::error::ErrorResponse;

/// Middleware state: the token validator.
pub type AuthState = Arc<dyn TokenService>;

/// Validates the bearer token when present.
///
/// A missing header passes through untouched — protected handlers
/// reject via `RequirePrincipal`. An invalid or expired token is
/// rejected here with 401.
pub async fn auth_middleware(
    State(tokens): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match tokens.validate(token).await {
            Ok(principal) => {
                request.extensions_mut().insert(principal);
                next.run(request).await
            }
            Err(e) => {
                let message = match e {
                    AuthError::TokenExpired => "Token expired",
                    _ => "Invalid token",
                };
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::new(message, "UNAUTHORIZED")),
                )
                    .into_response()
            }
        },
        None => next.run(request).await,
    }
}

/// Extractor that requires an authenticated principal.
#[derive(Debug, Clone)]
pub struct RequirePrincipal(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for RequirePrincipal
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(RequirePrincipal)
            .ok_or(AuthRejection)
    }
}

/// Rejection for requests with no authenticated principal.
#[derive(Debug, Clone)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Authentication required", "UNAUTHORIZED")),
        )
            .into_response()
    }
}
