//! HTTP DTOs for user accounts. The wire format is camelCase; the
//! password hash never crosses this boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Role, UserId};
use crate::domain::user::User;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Partial update: absent fields keep their current values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_omits_password_hash() {
        let user = User::register("ana", "secret-hash", "Ana", Role::User, Utc::now());
        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("\"username\":\"ana\""));
        assert!(json.contains("createdAt"));
    }

    #[test]
    fn update_request_fields_default_to_none() {
        let req: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
        assert!(req.role.is_none());

        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"role":"master"}"#).unwrap();
        assert_eq!(req.role, Some(Role::Master));
    }
}
