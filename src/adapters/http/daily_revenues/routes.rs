//! Router for daily revenue endpoints.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{delete_revenue, list_revenues, upsert_revenue};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/store/:store_id", get(list_revenues))
        .route("/", post(upsert_revenue))
        .route("/:id", delete(delete_revenue))
}
