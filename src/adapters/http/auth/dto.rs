//! HTTP DTOs for registration and login.

use serde::{Deserialize, Serialize};

use crate::adapters::http::users::dto::UserResponse;
use crate::application::LoginOutcome;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            token: outcome.token,
            user: outcome.user.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_deserializes_from_camel_case() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"username":"thiago","password":"271205"}"#).unwrap();
        assert_eq!(req.username, "thiago");
        assert_eq!(req.password, "271205");
    }
}
