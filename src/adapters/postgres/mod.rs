//! PostgreSQL adapters: the primary storage backend.

mod catalog;
mod gate;
mod identity;
mod ledger;
mod portioning;

pub use catalog::{PostgresGroupRepository, PostgresSupplierRepository};
pub use gate::PostgresAccessGate;
pub use identity::{PostgresAccessRegistry, PostgresStoreRepository, PostgresUserRepository};
pub use ledger::{
    PostgresGoalRepository, PostgresRevenueRepository, PostgresTransactionRepository,
};
pub use portioning::{PostgresPortionedEntryRepository, PostgresPortionedProductRepository};

use std::sync::Arc;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::application::ServicePorts;
use crate::config::DatabaseConfig;

/// Opens the connection pool described by the configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(config.url.expose_secret())
        .await
}

/// Applies the embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Bundles the PostgreSQL port implementations for service wiring.
pub fn ports(pool: PgPool) -> ServicePorts {
    ServicePorts {
        gate: Arc::new(PostgresAccessGate::new(pool.clone())),
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        stores: Arc::new(PostgresStoreRepository::new(pool.clone())),
        registry: Arc::new(PostgresAccessRegistry::new(pool.clone())),
        transactions: Arc::new(PostgresTransactionRepository::new(pool.clone())),
        revenues: Arc::new(PostgresRevenueRepository::new(pool.clone())),
        goals: Arc::new(PostgresGoalRepository::new(pool.clone())),
        suppliers: Arc::new(PostgresSupplierRepository::new(pool.clone())),
        groups: Arc::new(PostgresGroupRepository::new(pool.clone())),
        portioned_products: Arc::new(PostgresPortionedProductRepository::new(pool.clone())),
        portioned_entries: Arc::new(PostgresPortionedEntryRepository::new(pool)),
    }
}
