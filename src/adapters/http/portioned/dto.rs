//! HTTP DTOs for portioned products and entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PortionedEntryId, PortionedProductId, StoreId, SupplierId};
use crate::domain::portioning::{
    PortionedEntry, PortionedEntryDraft, PortionedEntryView, PortionedProduct,
    PortionedProductDraft, PortionedProductView,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortionedProductRequest {
    pub store_id: StoreId,
    pub raw_protein: String,
    pub portioned_product: String,
    pub standard_weight: f64,
    pub target_yield: f64,
    pub tolerance: f64,
    #[serde(default)]
    pub supplier_id: Option<SupplierId>,
    #[serde(default)]
    pub operator_name: Option<String>,
}

impl From<CreatePortionedProductRequest> for PortionedProductDraft {
    fn from(req: CreatePortionedProductRequest) -> Self {
        Self {
            raw_protein: req.raw_protein,
            portioned_product: req.portioned_product,
            standard_weight: req.standard_weight,
            target_yield: req.target_yield,
            tolerance: req.tolerance,
            supplier_id: req.supplier_id,
            operator_name: req.operator_name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortionedProductResponse {
    pub id: PortionedProductId,
    pub store_id: StoreId,
    pub raw_protein: String,
    pub portioned_product: String,
    pub standard_weight: f64,
    pub target_yield: f64,
    pub tolerance: f64,
    pub supplier_id: Option<SupplierId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    pub operator_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<PortionedProduct> for PortionedProductResponse {
    fn from(p: PortionedProduct) -> Self {
        Self {
            id: p.id,
            store_id: p.store_id,
            raw_protein: p.raw_protein,
            portioned_product: p.portioned_product,
            standard_weight: p.standard_weight,
            target_yield: p.target_yield,
            tolerance: p.tolerance,
            supplier_id: p.supplier_id,
            supplier_name: None,
            operator_name: p.operator_name,
            created_at: p.created_at,
        }
    }
}

impl From<PortionedProductView> for PortionedProductResponse {
    fn from(view: PortionedProductView) -> Self {
        let mut response: PortionedProductResponse = view.record.into();
        response.supplier_name = view.supplier_name;
        response
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortionedEntryRequest {
    pub store_id: StoreId,
    pub portioned_product_id: PortionedProductId,
    pub protein_name: String,
    #[serde(default)]
    pub supplier_id: Option<SupplierId>,
    pub price: f64,
    pub entry_date: NaiveDate,
}

impl From<CreatePortionedEntryRequest> for PortionedEntryDraft {
    fn from(req: CreatePortionedEntryRequest) -> Self {
        Self {
            portioned_product_id: req.portioned_product_id,
            protein_name: req.protein_name,
            supplier_id: req.supplier_id,
            price: req.price,
            entry_date: req.entry_date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortionedEntryResponse {
    pub id: PortionedEntryId,
    pub store_id: StoreId,
    pub portioned_product_id: PortionedProductId,
    pub protein_name: String,
    pub supplier_id: Option<SupplierId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    pub price: f64,
    pub entry_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<PortionedEntry> for PortionedEntryResponse {
    fn from(e: PortionedEntry) -> Self {
        Self {
            id: e.id,
            store_id: e.store_id,
            portioned_product_id: e.portioned_product_id,
            protein_name: e.protein_name,
            supplier_id: e.supplier_id,
            supplier_name: None,
            price: e.price,
            entry_date: e.entry_date,
            created_at: e.created_at,
        }
    }
}

impl From<PortionedEntryView> for PortionedEntryResponse {
    fn from(view: PortionedEntryView) -> Self {
        let mut response: PortionedEntryResponse = view.record.into();
        response.supplier_name = view.supplier_name;
        response
    }
}
