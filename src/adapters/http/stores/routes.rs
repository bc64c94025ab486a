//! Router for store endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{create_store, delete_store, get_store, list_stores, update_store};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stores).post(create_store))
        .route(
            "/:id",
            get(get_store).put(update_store).delete(delete_store),
        )
}
