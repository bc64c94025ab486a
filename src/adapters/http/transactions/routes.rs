//! Router for transaction endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{
    create_transaction, delete_transaction, list_transactions, update_transaction,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/store/:store_id", get(list_transactions))
        .route("/", post(create_transaction))
        .route("/:id", put(update_transaction).delete(delete_transaction))
}
