//! Routers for portioned product and entry endpoints. The two kinds
//! are mounted under separate path prefixes.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{
    create_entry, create_product, delete_entry, delete_product, list_entries, list_products,
};

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/store/:store_id", get(list_products))
        .route("/", post(create_product))
        .route("/:id", delete(delete_product))
}

pub fn entry_routes() -> Router<AppState> {
    Router::new()
        .route("/store/:store_id", get(list_entries))
        .route("/", post(create_entry))
        .route("/:id", delete(delete_entry))
}
