//! Router for access-grant endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{list_access, toggle_access};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_access))
        .route("/toggle", post(toggle_access))
}
