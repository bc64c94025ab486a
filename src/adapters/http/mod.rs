//! HTTP adapter: axum routers, DTOs, middleware, and error mapping.
//!
//! The wire format is camelCase JSON; translation to the snake_case
//! storage shape happens entirely in the per-resource `dto` modules.
//! All `/api` routes except login and register require a bearer token.

pub mod access;
pub mod auth;
pub mod daily_revenues;
pub mod dashboard;
mod error;
pub mod goals;
pub mod middleware;
pub mod portioned;
pub mod product_groups;
pub mod stores;
pub mod suppliers;
pub mod transactions;
pub mod users;

pub use error::{ApiError, ApiResult, ErrorResponse, MessageResponse};

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::application::{
    AccessService, DashboardService, GoalService, GroupService, IdentityService,
    PortioningService, RevenueService, ServicePorts, StoreScoped, StoreService, SupplierService,
    TransactionService,
};
use crate::ports::{PasswordHasher, TokenService};

/// Shared handler state: one Arc per service.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<IdentityService>,
    pub stores: Arc<StoreService>,
    pub access: Arc<AccessService>,
    pub transactions: Arc<TransactionService>,
    pub revenues: Arc<RevenueService>,
    pub goals: Arc<GoalService>,
    pub suppliers: Arc<SupplierService>,
    pub groups: Arc<GroupService>,
    pub portioning: Arc<PortioningService>,
    pub dashboard: Arc<DashboardService>,
    pub tokens: Arc<dyn TokenService>,
}

impl AppState {
    /// Wires the full service stack over one backend's ports.
    pub fn new(
        ports: ServicePorts,
        tokens: Arc<dyn TokenService>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let gate = ports.gate;
        Self {
            identity: Arc::new(IdentityService::new(
                ports.users,
                hasher,
                tokens.clone(),
            )),
            stores: Arc::new(StoreService::new(ports.stores, gate.clone())),
            access: Arc::new(AccessService::new(ports.registry)),
            transactions: Arc::new(TransactionService::new(StoreScoped::new(
                gate.clone(),
                ports.transactions.clone(),
            ))),
            revenues: Arc::new(RevenueService::new(StoreScoped::new(
                gate.clone(),
                ports.revenues.clone(),
            ))),
            goals: Arc::new(GoalService::new(StoreScoped::new(
                gate.clone(),
                ports.goals.clone(),
            ))),
            suppliers: Arc::new(SupplierService::new(StoreScoped::new(
                gate.clone(),
                ports.suppliers,
            ))),
            groups: Arc::new(GroupService::new(StoreScoped::new(
                gate.clone(),
                ports.groups,
            ))),
            portioning: Arc::new(PortioningService::new(
                StoreScoped::new(gate.clone(), ports.portioned_products),
                StoreScoped::new(gate.clone(), ports.portioned_entries),
            )),
            dashboard: Arc::new(DashboardService::new(
                gate,
                ports.revenues,
                ports.transactions,
                ports.goals,
            )),
            tokens,
        }
    }
}

/// GET /health — unauthenticated liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "OK" }))
}

/// Assembles the full application router.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/api/users", users::routes())
        .nest("/api/stores", stores::routes())
        .nest("/api/user-store-access", access::routes())
        .nest("/api/transactions", transactions::routes())
        .nest("/api/suppliers", suppliers::routes())
        .nest("/api/product-groups", product_groups::routes())
        .nest("/api/daily-revenues", daily_revenues::routes())
        .nest("/api/goals", goals::routes())
        .nest("/api/portioned-products", portioned::product_routes())
        .nest("/api/portioned-entries", portioned::entry_routes())
        .nest("/api/dashboard", dashboard::routes())
        .layer(axum::middleware::from_fn_with_state(
            state.tokens.clone(),
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth::routes())
        .merge(protected)
        .with_state(state)
}
