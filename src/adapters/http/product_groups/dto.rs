//! HTTP DTOs for product groups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::catalog::{GroupDraft, ProductGroup};
use crate::domain::foundation::{GroupId, StoreId};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub store_id: StoreId,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub cmc_target: f64,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub cmc_target: f64,
    #[serde(default)]
    pub icon: Option<String>,
}

impl From<CreateGroupRequest> for GroupDraft {
    fn from(req: CreateGroupRequest) -> Self {
        Self {
            name: req.name,
            color: req.color,
            cmc_target: req.cmc_target,
            icon: req.icon,
        }
    }
}

impl From<UpdateGroupRequest> for GroupDraft {
    fn from(req: UpdateGroupRequest) -> Self {
        Self {
            name: req.name,
            color: req.color,
            cmc_target: req.cmc_target,
            icon: req.icon,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub id: GroupId,
    pub store_id: StoreId,
    pub name: String,
    pub color: String,
    pub cmc_target: f64,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

impl From<ProductGroup> for GroupResponse {
    fn from(g: ProductGroup) -> Self {
        Self {
            id: g.id,
            store_id: g.store_id,
            name: g.name,
            color: g.color,
            cmc_target: g.cmc_target,
            icon: g.icon,
            created_at: g.created_at,
        }
    }
}
