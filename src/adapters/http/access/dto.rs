//! HTTP DTOs for the user-store access registry.

use serde::{Deserialize, Serialize};

use crate::application::{ToggleAction, ToggleOutcome};
use crate::domain::foundation::{StoreId, UserId};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleAccessRequest {
    pub user_id: UserId,
    pub store_id: StoreId,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleAccessResponse {
    pub action: ToggleAction,
    pub user_id: UserId,
    pub store_id: StoreId,
}

impl From<ToggleOutcome> for ToggleAccessResponse {
    fn from(outcome: ToggleOutcome) -> Self {
        Self {
            action: outcome.action,
            user_id: outcome.user_id,
            store_id: outcome.store_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_response_serializes_action_lowercase() {
        let response = ToggleAccessResponse {
            action: ToggleAction::Added,
            user_id: UserId::new(),
            store_id: StoreId::new(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"action\":\"added\""));
        assert!(json.contains("userId"));
        assert!(json.contains("storeId"));
    }
}
