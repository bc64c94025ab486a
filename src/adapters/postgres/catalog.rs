//! PostgreSQL implementations of the catalog repositories.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::catalog::{ProductGroup, Supplier};
use crate::domain::foundation::{DomainError, GroupId, StoreId, SupplierId};
use crate::ports::{GroupRepository, SupplierRepository};

type SupplierRow = (Uuid, Uuid, String, String, String, String, DateTime<Utc>);
type GroupRow = (Uuid, Uuid, String, String, f64, String, DateTime<Utc>);

fn row_to_supplier(row: SupplierRow) -> Supplier {
    let (id, store_id, name, contact, email, categories, created_at) = row;
    Supplier {
        id: SupplierId::from_uuid(id),
        store_id: StoreId::from_uuid(store_id),
        name,
        contact,
        email,
        categories,
        created_at,
    }
}

fn row_to_group(row: GroupRow) -> ProductGroup {
    let (id, store_id, name, color, cmc_target, icon, created_at) = row;
    ProductGroup {
        id: GroupId::from_uuid(id),
        store_id: StoreId::from_uuid(store_id),
        name,
        color,
        cmc_target,
        icon,
        created_at,
    }
}

#[derive(Clone)]
pub struct PostgresSupplierRepository {
    pool: PgPool,
}

impl PostgresSupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupplierRepository for PostgresSupplierRepository {
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<Supplier>, DomainError> {
        let rows: Vec<SupplierRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, name, contact, email, categories, created_at
            FROM suppliers
            WHERE store_id = $1
            ORDER BY name
            "#,
        )
        .bind(store_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(rows.into_iter().map(row_to_supplier).collect())
    }

    async fn insert(&self, supplier: &Supplier) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO suppliers (id, store_id, name, contact, email, categories, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(supplier.id.as_uuid())
        .bind(supplier.store_id.as_uuid())
        .bind(&supplier.name)
        .bind(&supplier.contact)
        .bind(&supplier.email)
        .bind(&supplier.categories)
        .bind(supplier.created_at)
        .execute(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(())
    }

    async fn find_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, DomainError> {
        let row: Option<SupplierRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, name, contact, email, categories, created_at
            FROM suppliers WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(row.map(row_to_supplier))
    }

    async fn update(&self, supplier: &Supplier) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE suppliers
            SET name = $2, contact = $3, email = $4, categories = $5
            WHERE id = $1
            "#,
        )
        .bind(supplier.id.as_uuid())
        .bind(&supplier.name)
        .bind(&supplier.contact)
        .bind(&supplier.email)
        .bind(&supplier.categories)
        .execute(&self.pool)
        .await
        .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::record_not_found("Supplier"));
        }
        Ok(())
    }

    async fn delete(&self, id: SupplierId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::record_not_found("Supplier"));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresGroupRepository {
    pool: PgPool,
}

impl PostgresGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PostgresGroupRepository {
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<ProductGroup>, DomainError> {
        let rows: Vec<GroupRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, name, color, cmc_target, icon, created_at
            FROM product_groups
            WHERE store_id = $1
            ORDER BY name
            "#,
        )
        .bind(store_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(rows.into_iter().map(row_to_group).collect())
    }

    async fn insert(&self, group: &ProductGroup) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO product_groups (id, store_id, name, color, cmc_target, icon, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(group.id.as_uuid())
        .bind(group.store_id.as_uuid())
        .bind(&group.name)
        .bind(&group.color)
        .bind(group.cmc_target)
        .bind(&group.icon)
        .bind(group.created_at)
        .execute(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(())
    }

    async fn find_by_id(&self, id: GroupId) -> Result<Option<ProductGroup>, DomainError> {
        let row: Option<GroupRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, name, color, cmc_target, icon, created_at
            FROM product_groups WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(row.map(row_to_group))
    }

    async fn update(&self, group: &ProductGroup) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE product_groups
            SET name = $2, color = $3, cmc_target = $4, icon = $5
            WHERE id = $1
            "#,
        )
        .bind(group.id.as_uuid())
        .bind(&group.name)
        .bind(&group.color)
        .bind(group.cmc_target)
        .bind(&group.icon)
        .execute(&self.pool)
        .await
        .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::record_not_found("Product group"));
        }
        Ok(())
    }

    async fn delete(&self, id: GroupId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM product_groups WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::record_not_found("Product group"));
        }
        Ok(())
    }
}
