//! Router for supplier endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{create_supplier, delete_supplier, list_suppliers, update_supplier};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/store/:store_id", get(list_suppliers))
        .route("/", post(create_supplier))
        .route("/:id", put(update_supplier).delete(delete_supplier))
}
