//! PostgreSQL implementations of the portioning repositories.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, PortionedEntryId, PortionedProductId, StoreId, SupplierId,
};
use crate::domain::portioning::{
    PortionedEntry, PortionedEntryView, PortionedProduct, PortionedProductView,
};
use crate::ports::{PortionedEntryRepository, PortionedProductRepository};

type ProductRow = (
    Uuid,
    Uuid,
    String,
    String,
    f64,
    f64,
    f64,
    Option<Uuid>,
    Option<String>,
    DateTime<Utc>,
);
type EntryRow = (
    Uuid,
    Uuid,
    Uuid,
    String,
    Option<Uuid>,
    f64,
    NaiveDate,
    DateTime<Utc>,
);

fn row_to_product(row: ProductRow) -> PortionedProduct {
    let (
        id,
        store_id,
        raw_protein,
        portioned_product,
        standard_weight,
        target_yield,
        tolerance,
        supplier_id,
        operator_name,
        created_at,
    ) = row;
    PortionedProduct {
        id: PortionedProductId::from_uuid(id),
        store_id: StoreId::from_uuid(store_id),
        raw_protein,
        portioned_product,
        standard_weight,
        target_yield,
        tolerance,
        supplier_id: supplier_id.map(SupplierId::from_uuid),
        operator_name,
        created_at,
    }
}

fn row_to_entry(row: EntryRow) -> PortionedEntry {
    let (id, store_id, portioned_product_id, protein_name, supplier_id, price, entry_date, created_at) =
        row;
    PortionedEntry {
        id: PortionedEntryId::from_uuid(id),
        store_id: StoreId::from_uuid(store_id),
        portioned_product_id: PortionedProductId::from_uuid(portioned_product_id),
        protein_name,
        supplier_id: supplier_id.map(SupplierId::from_uuid),
        price,
        entry_date,
        created_at,
    }
}

#[derive(Clone)]
pub struct PostgresPortionedProductRepository {
    pool: PgPool,
}

impl PostgresPortionedProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortionedProductRepository for PostgresPortionedProductRepository {
    async fn list_by_store(
        &self,
        store_id: StoreId,
    ) -> Result<Vec<PortionedProductView>, DomainError> {
        type ViewRow = (
            Uuid,
            Uuid,
            String,
            String,
            f64,
            f64,
            f64,
            Option<Uuid>,
            Option<String>,
            DateTime<Utc>,
            Option<String>,
        );

        let rows: Vec<ViewRow> = sqlx::query_as(
            r#"
            SELECT pp.id, pp.store_id, pp.raw_protein, pp.portioned_product,
                   pp.standard_weight, pp.target_yield, pp.tolerance,
                   pp.supplier_id, pp.operator_name, pp.created_at,
                   s.name AS supplier_name
            FROM portioned_products pp
            LEFT JOIN suppliers s ON pp.supplier_id = s.id
            WHERE pp.store_id = $1
            ORDER BY pp.created_at DESC
            "#,
        )
        .bind(store_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let (a, b, c, d, e, f, g, h, i, j, supplier_name) = row;
                PortionedProductView {
                    record: row_to_product((a, b, c, d, e, f, g, h, i, j)),
                    supplier_name,
                }
            })
            .collect())
    }

    async fn insert(&self, product: &PortionedProduct) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO portioned_products
                (id, store_id, raw_protein, portioned_product, standard_weight,
                 target_yield, tolerance, supplier_id, operator_name, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(product.store_id.as_uuid())
        .bind(&product.raw_protein)
        .bind(&product.portioned_product)
        .bind(product.standard_weight)
        .bind(product.target_yield)
        .bind(product.tolerance)
        .bind(product.supplier_id.map(|s| *s.as_uuid()))
        .bind(&product.operator_name)
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: PortionedProductId,
    ) -> Result<Option<PortionedProduct>, DomainError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, raw_protein, portioned_product, standard_weight,
                   target_yield, tolerance, supplier_id, operator_name, created_at
            FROM portioned_products WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(row.map(row_to_product))
    }

    async fn delete(&self, id: PortionedProductId) -> Result<(), DomainError> {
        // Entries referencing the product go with it (ON DELETE CASCADE).
        let result = sqlx::query("DELETE FROM portioned_products WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::record_not_found("Portioned product"));
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresPortionedEntryRepository {
    pool: PgPool,
}

impl PostgresPortionedEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortionedEntryRepository for PostgresPortionedEntryRepository {
    async fn list_by_store(
        &self,
        store_id: StoreId,
    ) -> Result<Vec<PortionedEntryView>, DomainError> {
        type ViewRow = (
            Uuid,
            Uuid,
            Uuid,
            String,
            Option<Uuid>,
            f64,
            NaiveDate,
            DateTime<Utc>,
            Option<String>,
        );

        let rows: Vec<ViewRow> = sqlx::query_as(
            r#"
            SELECT pe.id, pe.store_id, pe.portioned_product_id, pe.protein_name,
                   pe.supplier_id, pe.price, pe.entry_date, pe.created_at,
                   s.name AS supplier_name
            FROM portioned_entries pe
            LEFT JOIN suppliers s ON pe.supplier_id = s.id
            WHERE pe.store_id = $1
            ORDER BY pe.entry_date DESC, pe.created_at DESC
            "#,
        )
        .bind(store_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let (a, b, c, d, e, f, g, h, supplier_name) = row;
                PortionedEntryView {
                    record: row_to_entry((a, b, c, d, e, f, g, h)),
                    supplier_name,
                }
            })
            .collect())
    }

    async fn insert(&self, entry: &PortionedEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO portioned_entries
                (id, store_id, portioned_product_id, protein_name, supplier_id,
                 price, entry_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(entry.store_id.as_uuid())
        .bind(entry.portioned_product_id.as_uuid())
        .bind(&entry.protein_name)
        .bind(entry.supplier_id.map(|s| *s.as_uuid()))
        .bind(entry.price)
        .bind(entry.entry_date)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: PortionedEntryId,
    ) -> Result<Option<PortionedEntry>, DomainError> {
        let row: Option<EntryRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, portioned_product_id, protein_name, supplier_id,
                   price, entry_date, created_at
            FROM portioned_entries WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(row.map(row_to_entry))
    }

    async fn delete(&self, id: PortionedEntryId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM portioned_entries WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::record_not_found("Portioned entry"));
        }
        Ok(())
    }
}
