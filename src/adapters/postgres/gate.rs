//! PostgreSQL implementation of the store access gate.
//!
//! One owner-or-grant query decides every store-scoped request. The
//! same query that the original system repeated inline in every route
//! lives here exactly once.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, Principal, StoreId};
use crate::ports::{AccessDecision, StoreAccessGate};

pub struct PostgresAccessGate {
    pool: PgPool,
}

impl PostgresAccessGate {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreAccessGate for PostgresAccessGate {
    async fn allows(
        &self,
        principal: &Principal,
        store_id: StoreId,
    ) -> Result<AccessDecision, DomainError> {
        if principal.is_master() {
            return Ok(AccessDecision::Granted);
        }

        let row: Option<(i32,)> = sqlx::query_as(
            r#"
            SELECT 1 FROM stores s
            LEFT JOIN user_store_access usa ON s.id = usa.store_id AND usa.user_id = $2
            WHERE s.id = $1 AND (s.owner_id = $2 OR usa.user_id = $2)
            LIMIT 1
            "#,
        )
        .bind(store_id.as_uuid())
        .bind(principal.id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        // A missing store and a store without a relation are the same
        // denial; existence is never leaked.
        Ok(if row.is_some() {
            AccessDecision::Granted
        } else {
            AccessDecision::Denied
        })
    }
}
