//! Router for product group endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{create_group, delete_group, list_groups, update_group};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/store/:store_id", get(list_groups))
        .route("/", post(create_group))
        .route("/:id", put(update_group).delete(delete_group))
}
