//! Router for goal endpoints.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{delete_goal, list_goals, upsert_goal};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/store/:store_id", get(list_goals))
        .route("/", post(upsert_goal))
        .route("/:id", delete(delete_goal))
}
