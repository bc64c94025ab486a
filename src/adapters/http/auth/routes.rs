//! Router for authentication endpoints.

use axum::routing::post;
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{login, register};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
