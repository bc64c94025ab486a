//! PostgreSQL implementations of the ledger repositories.
//!
//! Revenues and goals use `INSERT ... ON CONFLICT DO UPDATE` on their
//! uniqueness keys; conflict resolution is entirely the engine's
//! (last write wins), with no application-level retry.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, ErrorCode, GoalId, GroupId, RevenueId, StoreId, SupplierId, TransactionId,
};
use crate::domain::ledger::{
    DailyRevenue, Month, StoreGoal, Transaction, TransactionType, TransactionView,
};
use crate::ports::{GoalRepository, RevenueRepository, TransactionRepository};

type TransactionRow = (
    Uuid,
    Uuid,
    String,
    String,
    f64,
    NaiveDate,
    Option<NaiveDate>,
    Option<Uuid>,
    Option<Uuid>,
    Option<String>,
    DateTime<Utc>,
);
type RevenueRow = (Uuid, Uuid, NaiveDate, f64, f64, f64, f64, DateTime<Utc>);
type GoalRow = (Uuid, Uuid, String, f64, f64, f64, DateTime<Utc>);

fn row_to_transaction(row: TransactionRow) -> Result<Transaction, DomainError> {
    let (
        id,
        store_id,
        kind,
        description,
        amount,
        date,
        due_date,
        group_id,
        supplier_id,
        invoice_number,
        created_at,
    ) = row;
    let kind = TransactionType::parse(&kind).ok_or_else(|| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid transaction type: {}", kind),
        )
    })?;
    Ok(Transaction {
        id: TransactionId::from_uuid(id),
        store_id: StoreId::from_uuid(store_id),
        kind,
        description,
        amount,
        date,
        due_date,
        group_id: group_id.map(GroupId::from_uuid),
        supplier_id: supplier_id.map(SupplierId::from_uuid),
        invoice_number,
        created_at,
    })
}

fn row_to_revenue(row: RevenueRow) -> DailyRevenue {
    let (id, store_id, date, salon, delivery, service_charge, total, created_at) = row;
    DailyRevenue {
        id: RevenueId::from_uuid(id),
        store_id: StoreId::from_uuid(store_id),
        date,
        salon,
        delivery,
        service_charge,
        total,
        created_at,
    }
}

fn row_to_goal(row: GoalRow) -> Result<StoreGoal, DomainError> {
    let (id, store_id, month, revenue_target, cmc_target, avg_ticket, created_at) = row;
    let month = Month::parse(&month)
        .map_err(|_| DomainError::new(ErrorCode::DatabaseError, format!("Invalid month: {}", month)))?;
    Ok(StoreGoal {
        id: GoalId::from_uuid(id),
        store_id: StoreId::from_uuid(store_id),
        month,
        revenue_target,
        cmc_target,
        avg_ticket,
        created_at,
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Transactions
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresTransactionRepository {
    pool: PgPool,
}

impl PostgresTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PostgresTransactionRepository {
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<TransactionView>, DomainError> {
        type ViewRow = (
            Uuid,
            Uuid,
            String,
            String,
            f64,
            NaiveDate,
            Option<NaiveDate>,
            Option<Uuid>,
            Option<Uuid>,
            Option<String>,
            DateTime<Utc>,
            Option<String>,
            Option<String>,
        );

        let rows: Vec<ViewRow> = sqlx::query_as(
            r#"
            SELECT t.id, t.store_id, t.type, t.description, t.amount, t.date,
                   t.due_date, t.group_id, t.supplier_id, t.invoice_number, t.created_at,
                   pg.name AS group_name,
                   s.name AS supplier_name
            FROM transactions t
            LEFT JOIN product_groups pg ON t.group_id = pg.id
            LEFT JOIN suppliers s ON t.supplier_id = s.id
            WHERE t.store_id = $1
            ORDER BY t.date DESC, t.created_at DESC
            "#,
        )
        .bind(store_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::database)?;

        rows.into_iter()
            .map(|row| {
                let (
                    id,
                    store_id,
                    kind,
                    description,
                    amount,
                    date,
                    due_date,
                    group_id,
                    supplier_id,
                    invoice_number,
                    created_at,
                    group_name,
                    supplier_name,
                ) = row;
                let record = row_to_transaction((
                    id,
                    store_id,
                    kind,
                    description,
                    amount,
                    date,
                    due_date,
                    group_id,
                    supplier_id,
                    invoice_number,
                    created_at,
                ))?;
                Ok(TransactionView {
                    record,
                    group_name,
                    supplier_name,
                })
            })
            .collect()
    }

    async fn insert(&self, transaction: &Transaction) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO transactions
                (id, store_id, type, description, amount, date, due_date,
                 group_id, supplier_id, invoice_number, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(transaction.id.as_uuid())
        .bind(transaction.store_id.as_uuid())
        .bind(transaction.kind.as_str())
        .bind(&transaction.description)
        .bind(transaction.amount)
        .bind(transaction.date)
        .bind(transaction.due_date)
        .bind(transaction.group_id.map(|g| *g.as_uuid()))
        .bind(transaction.supplier_id.map(|s| *s.as_uuid()))
        .bind(&transaction.invoice_number)
        .bind(transaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(())
    }

    async fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>, DomainError> {
        let row: Option<TransactionRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, type, description, amount, date, due_date,
                   group_id, supplier_id, invoice_number, created_at
            FROM transactions WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        row.map(row_to_transaction).transpose()
    }

    async fn update(&self, transaction: &Transaction) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE transactions
            SET type = $2, description = $3, amount = $4, date = $5,
                due_date = $6, group_id = $7, supplier_id = $8, invoice_number = $9
            WHERE id = $1
            "#,
        )
        .bind(transaction.id.as_uuid())
        .bind(transaction.kind.as_str())
        .bind(&transaction.description)
        .bind(transaction.amount)
        .bind(transaction.date)
        .bind(transaction.due_date)
        .bind(transaction.group_id.map(|g| *g.as_uuid()))
        .bind(transaction.supplier_id.map(|s| *s.as_uuid()))
        .bind(&transaction.invoice_number)
        .execute(&self.pool)
        .await
        .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::record_not_found("Transaction"));
        }
        Ok(())
    }

    async fn delete(&self, id: TransactionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::record_not_found("Transaction"));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Daily revenues
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresRevenueRepository {
    pool: PgPool,
}

impl PostgresRevenueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevenueRepository for PostgresRevenueRepository {
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<DailyRevenue>, DomainError> {
        let rows: Vec<RevenueRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, date, salon, delivery, service_charge, total, created_at
            FROM daily_revenues
            WHERE store_id = $1
            ORDER BY date DESC
            "#,
        )
        .bind(store_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(rows.into_iter().map(row_to_revenue).collect())
    }

    async fn upsert(&self, revenue: &DailyRevenue) -> Result<DailyRevenue, DomainError> {
        let row: RevenueRow = sqlx::query_as(
            r#"
            INSERT INTO daily_revenues
                (id, store_id, date, salon, delivery, service_charge, total, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (store_id, date)
            DO UPDATE SET
                salon = EXCLUDED.salon,
                delivery = EXCLUDED.delivery,
                service_charge = EXCLUDED.service_charge,
                total = EXCLUDED.total
            RETURNING id, store_id, date, salon, delivery, service_charge, total, created_at
            "#,
        )
        .bind(revenue.id.as_uuid())
        .bind(revenue.store_id.as_uuid())
        .bind(revenue.date)
        .bind(revenue.salon)
        .bind(revenue.delivery)
        .bind(revenue.service_charge)
        .bind(revenue.total)
        .bind(revenue.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(row_to_revenue(row))
    }

    async fn find_by_id(&self, id: RevenueId) -> Result<Option<DailyRevenue>, DomainError> {
        let row: Option<RevenueRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, date, salon, delivery, service_charge, total, created_at
            FROM daily_revenues WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(row.map(row_to_revenue))
    }

    async fn delete(&self, id: RevenueId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM daily_revenues WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::record_not_found("Daily revenue"));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Goals
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresGoalRepository {
    pool: PgPool,
}

impl PostgresGoalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for PostgresGoalRepository {
    async fn list_by_store(&self, store_id: StoreId) -> Result<Vec<StoreGoal>, DomainError> {
        let rows: Vec<GoalRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, month, revenue_target, cmc_target, avg_ticket, created_at
            FROM goals
            WHERE store_id = $1
            ORDER BY month DESC
            "#,
        )
        .bind(store_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::database)?;

        rows.into_iter().map(row_to_goal).collect()
    }

    async fn upsert(&self, goal: &StoreGoal) -> Result<StoreGoal, DomainError> {
        let row: GoalRow = sqlx::query_as(
            r#"
            INSERT INTO goals
                (id, store_id, month, revenue_target, cmc_target, avg_ticket, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (store_id, month)
            DO UPDATE SET
                revenue_target = EXCLUDED.revenue_target,
                cmc_target = EXCLUDED.cmc_target,
                avg_ticket = EXCLUDED.avg_ticket
            RETURNING id, store_id, month, revenue_target, cmc_target, avg_ticket, created_at
            "#,
        )
        .bind(goal.id.as_uuid())
        .bind(goal.store_id.as_uuid())
        .bind(goal.month.as_str())
        .bind(goal.revenue_target)
        .bind(goal.cmc_target)
        .bind(goal.avg_ticket)
        .bind(goal.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::database)?;

        row_to_goal(row)
    }

    async fn find_by_id(&self, id: GoalId) -> Result<Option<StoreGoal>, DomainError> {
        let row: Option<GoalRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, month, revenue_target, cmc_target, avg_ticket, created_at
            FROM goals WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        row.map(row_to_goal).transpose()
    }

    async fn find_by_month(
        &self,
        store_id: StoreId,
        month: &Month,
    ) -> Result<Option<StoreGoal>, DomainError> {
        let row: Option<GoalRow> = sqlx::query_as(
            r#"
            SELECT id, store_id, month, revenue_target, cmc_target, avg_ticket, created_at
            FROM goals WHERE store_id = $1 AND month = $2
            "#,
        )
        .bind(store_id.as_uuid())
        .bind(month.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        row.map(row_to_goal).transpose()
    }

    async fn delete(&self, id: GoalId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::record_not_found("Goal"));
        }
        Ok(())
    }
}
