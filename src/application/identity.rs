//! Identity: registration, login, and user administration.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::foundation::{DomainError, ErrorCode, Principal, Role, UserId};
use crate::domain::user::{validate_pin, validate_username, User};
use crate::ports::{PasswordHasher, TokenService, UserRepository};

/// Successful login: the issued bearer token plus the account it
/// belongs to.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub user: User,
}

pub struct IdentityService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl IdentityService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Registers a regular account. Masters are never created here —
    /// the first one is seeded at startup and further ones only by
    /// role change.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> Result<User, DomainError> {
        validate_username(username)?;
        validate_pin(password)?;
        if name.trim().is_empty() {
            return Err(DomainError::validation("name", "Name is required"));
        }

        let hash = self.hasher.hash(password)?;
        let user = User::register(username, hash, name, Role::User, Utc::now());
        self.users.create(&user).await?;

        tracing::info!(username = %user.username, "user registered");
        Ok(user)
    }

    /// Verifies credentials and issues a session token. Any mismatch —
    /// unknown username or wrong password — yields the same generic
    /// unauthorized error.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, DomainError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(DomainError::unauthorized)?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(DomainError::unauthorized());
        }

        let principal = Principal::new(user.id, user.username.clone(), user.role);
        let token = self.tokens.issue(&principal).await.map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Token issue failed: {}", e))
        })?;

        Ok(LoginOutcome { token, user })
    }

    /// Seeds the first master account when none exists yet. Returns
    /// the created account, or None when a master is already present.
    pub async fn bootstrap_master(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> Result<Option<User>, DomainError> {
        if self.users.count_masters().await? > 0 {
            return Ok(None);
        }
        validate_username(username)?;
        validate_pin(password)?;

        let hash = self.hasher.hash(password)?;
        let user = User::register(username, hash, name, Role::Master, Utc::now());
        self.users.create(&user).await?;

        tracing::info!(username = %user.username, "master account seeded");
        Ok(Some(user))
    }

    /// All accounts, newest first. Master only.
    pub async fn list_users(&self, principal: &Principal) -> Result<Vec<User>, DomainError> {
        require_master(principal)?;
        self.users.list().await
    }

    /// One account; visible to masters and to the account itself.
    pub async fn get_user(&self, principal: &Principal, id: UserId) -> Result<User, DomainError> {
        if !principal.is_master() && principal.id != id {
            return Err(access_denied());
        }
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))
    }

    /// Updates name and/or role. Master only; demoting the last master
    /// is rejected.
    pub async fn update_user(
        &self,
        principal: &Principal,
        id: UserId,
        name: Option<String>,
        role: Option<Role>,
    ) -> Result<User, DomainError> {
        require_master(principal)?;

        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))?;

        if let Some(new_role) = role {
            if user.role.is_master()
                && !new_role.is_master()
                && self.users.count_masters().await? <= 1
            {
                return Err(DomainError::validation(
                    "role",
                    "Cannot demote the last master account",
                ));
            }
            user.role = new_role;
        }
        if let Some(new_name) = name {
            if new_name.trim().is_empty() {
                return Err(DomainError::validation("name", "Name is required"));
            }
            user.name = new_name;
        }

        self.users.update(&user).await?;
        Ok(user)
    }

    /// Deletes an account. Master only; self-deletion and deleting the
    /// last master are rejected.
    pub async fn delete_user(&self, principal: &Principal, id: UserId) -> Result<(), DomainError> {
        require_master(principal)?;

        if principal.id == id {
            return Err(DomainError::validation(
                "id",
                "Cannot delete your own account",
            ));
        }

        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))?;

        if user.role.is_master() && self.users.count_masters().await? <= 1 {
            return Err(DomainError::validation(
                "id",
                "Cannot delete the last master account",
            ));
        }

        self.users.delete(id).await
    }
}

fn require_master(principal: &Principal) -> Result<(), DomainError> {
    if principal.is_master() {
        Ok(())
    } else {
        Err(access_denied())
    }
}

fn access_denied() -> DomainError {
    DomainError::new(ErrorCode::Forbidden, "Access denied")
}
