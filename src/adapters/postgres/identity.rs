//! PostgreSQL implementations of the user repository, the store
//! repository, and the access-grant registry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, Principal, Role, StoreId, UserId};
use crate::domain::store::Store;
use crate::domain::user::User;
use crate::ports::{AccessRegistry, StoreRepository, UserRepository};

type UserRow = (Uuid, String, String, String, String, DateTime<Utc>);
type StoreRow = (Uuid, Uuid, String, DateTime<Utc>);

fn row_to_user(row: UserRow) -> Result<User, DomainError> {
    let (id, username, password_hash, name, role, created_at) = row;
    let role = Role::parse(&role).ok_or_else(|| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid role value: {}", role),
        )
    })?;
    Ok(User {
        id: UserId::from_uuid(id),
        username,
        password_hash,
        name,
        role,
        created_at,
    })
}

fn row_to_store(row: StoreRow) -> Store {
    let (id, owner_id, name, created_at) = row;
    Store {
        id: StoreId::from_uuid(id),
        owner_id: UserId::from_uuid(owner_id),
        name,
        created_at,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Users
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, name, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                DomainError::validation("username", "Username already taken")
            } else {
                DomainError::database(e)
            }
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, username, password_hash, name, role, created_at FROM users WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, username, password_hash, name, role, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        row.map(row_to_user).transpose()
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            "SELECT id, username, password_hash, name, role, created_at FROM users ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::database)?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET name = $2, role = $3 WHERE id = $1")
            .bind(user.id.as_uuid())
            .bind(&user.name)
            .bind(user.role.as_str())
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        }
        Ok(())
    }

    async fn count_masters(&self) -> Result<u32, DomainError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM users WHERE role = 'master'")
                .fetch_one(&self.pool)
                .await
                .map_err(DomainError::database)?;

        Ok(count as u32)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Stores
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresStoreRepository {
    pool: PgPool,
}

impl PostgresStoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for PostgresStoreRepository {
    async fn create(&self, store: &Store) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO stores (id, owner_id, name, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(store.id.as_uuid())
        .bind(store.owner_id.as_uuid())
        .bind(&store.name)
        .bind(store.created_at)
        .execute(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(())
    }

    async fn find_by_id(&self, id: StoreId) -> Result<Option<Store>, DomainError> {
        let row: Option<StoreRow> = sqlx::query_as(
            "SELECT id, owner_id, name, created_at FROM stores WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(row.map(row_to_store))
    }

    async fn list_visible(&self, principal: &Principal) -> Result<Vec<Store>, DomainError> {
        let rows: Vec<StoreRow> = if principal.is_master() {
            sqlx::query_as(
                "SELECT id, owner_id, name, created_at FROM stores ORDER BY created_at DESC",
            )
            .fetch_all(&self.pool)
            .await
            .map_err(DomainError::database)?
        } else {
            sqlx::query_as(
                r#"
                SELECT DISTINCT s.id, s.owner_id, s.name, s.created_at
                FROM stores s
                LEFT JOIN user_store_access usa ON s.id = usa.store_id
                WHERE s.owner_id = $1 OR usa.user_id = $1
                ORDER BY s.created_at DESC
                "#,
            )
            .bind(principal.id.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(DomainError::database)?
        };

        Ok(rows.into_iter().map(row_to_store).collect())
    }

    async fn update(&self, store: &Store) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE stores SET name = $2 WHERE id = $1")
            .bind(store.id.as_uuid())
            .bind(&store.name)
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::StoreNotFound, "Store not found"));
        }
        Ok(())
    }

    async fn delete(&self, id: StoreId) -> Result<(), DomainError> {
        // Children go with the store via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::StoreNotFound, "Store not found"));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Access grants
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PostgresAccessRegistry {
    pool: PgPool,
}

impl PostgresAccessRegistry {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessRegistry for PostgresAccessRegistry {
    async fn list_all(&self) -> Result<Vec<(UserId, StoreId)>, DomainError> {
        let rows: Vec<(Uuid, Uuid)> =
            sqlx::query_as("SELECT user_id, store_id FROM user_store_access")
                .fetch_all(&self.pool)
                .await
                .map_err(DomainError::database)?;

        Ok(rows
            .into_iter()
            .map(|(u, s)| (UserId::from_uuid(u), StoreId::from_uuid(s)))
            .collect())
    }

    async fn contains(&self, user_id: UserId, store_id: StoreId) -> Result<bool, DomainError> {
        let row: Option<(i32,)> = sqlx::query_as(
            "SELECT 1 FROM user_store_access WHERE user_id = $1 AND store_id = $2",
        )
        .bind(user_id.as_uuid())
        .bind(store_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(row.is_some())
    }

    async fn insert(&self, user_id: UserId, store_id: StoreId) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO user_store_access (user_id, store_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, store_id) DO NOTHING
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(store_id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(DomainError::database)?;

        Ok(())
    }

    async fn remove(&self, user_id: UserId, store_id: StoreId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM user_store_access WHERE user_id = $1 AND store_id = $2")
            .bind(user_id.as_uuid())
            .bind(store_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;

        Ok(())
    }
}
