//! HTTP DTOs for suppliers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Supplier, SupplierDraft};
use crate::domain::foundation::{StoreId, SupplierId};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupplierRequest {
    pub store_id: StoreId,
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub categories: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplierRequest {
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub categories: String,
}

impl From<CreateSupplierRequest> for SupplierDraft {
    fn from(req: CreateSupplierRequest) -> Self {
        Self {
            name: req.name,
            contact: req.contact,
            email: req.email,
            categories: req.categories,
        }
    }
}

impl From<UpdateSupplierRequest> for SupplierDraft {
    fn from(req: UpdateSupplierRequest) -> Self {
        Self {
            name: req.name,
            contact: req.contact,
            email: req.email,
            categories: req.categories,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierResponse {
    pub id: SupplierId,
    pub store_id: StoreId,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub categories: String,
    pub created_at: DateTime<Utc>,
}

impl From<Supplier> for SupplierResponse {
    fn from(s: Supplier) -> Self {
        Self {
            id: s.id,
            store_id: s.store_id,
            name: s.name,
            contact: s.contact,
            email: s.email,
            categories: s.categories,
            created_at: s.created_at,
        }
    }
}
