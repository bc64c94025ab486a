//! Router for dashboard endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::monthly_summary;

pub fn routes() -> Router<AppState> {
    Router::new().route("/store/:store_id/summary", get(monthly_summary))
}
