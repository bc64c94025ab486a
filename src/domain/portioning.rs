//! Portioned-product yield control.
//!
//! A portioned product defines the expected yield when a raw protein is
//! broken down; entries are an append-only log of purchase prices for
//! that product. The protein name on an entry is a snapshot taken at
//! entry time, so later edits to the product do not rewrite history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::foundation::{DomainError, PortionedEntryId, PortionedProductId, StoreId, SupplierId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortionedProduct {
    pub id: PortionedProductId,
    pub store_id: StoreId,
    pub raw_protein: String,
    pub portioned_product: String,
    /// Standard portion weight in grams.
    pub standard_weight: f64,
    /// Expected yield percentage.
    pub target_yield: f64,
    /// Accepted deviation from the target, in percentage points.
    pub tolerance: f64,
    pub supplier_id: Option<SupplierId>,
    pub operator_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PortionedProductDraft {
    pub raw_protein: String,
    pub portioned_product: String,
    pub standard_weight: f64,
    pub target_yield: f64,
    pub tolerance: f64,
    pub supplier_id: Option<SupplierId>,
    pub operator_name: Option<String>,
}

impl PortionedProductDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.raw_protein.trim().is_empty() {
            return Err(DomainError::validation(
                "rawProtein",
                "Raw protein is required",
            ));
        }
        if self.portioned_product.trim().is_empty() {
            return Err(DomainError::validation(
                "portionedProduct",
                "Portioned product is required",
            ));
        }
        if self.standard_weight <= 0.0 || !self.standard_weight.is_finite() {
            return Err(DomainError::validation(
                "standardWeight",
                "Standard weight must be a positive number of grams",
            ));
        }
        for (field, value) in [("targetYield", self.target_yield), ("tolerance", self.tolerance)] {
            if value < 0.0 || !value.is_finite() {
                return Err(DomainError::validation(
                    field,
                    "Percentage must be a non-negative number",
                ));
            }
        }
        Ok(())
    }

    pub fn into_product(
        self,
        store_id: StoreId,
        now: DateTime<Utc>,
    ) -> Result<PortionedProduct, DomainError> {
        self.validate()?;
        Ok(PortionedProduct {
            id: PortionedProductId::new(),
            store_id,
            raw_protein: self.raw_protein,
            portioned_product: self.portioned_product,
            standard_weight: self.standard_weight,
            target_yield: self.target_yield,
            tolerance: self.tolerance,
            supplier_id: self.supplier_id,
            operator_name: self.operator_name,
            created_at: now,
        })
    }
}

/// A product as listed, with the supplier name joined in.
#[derive(Debug, Clone)]
pub struct PortionedProductView {
    pub record: PortionedProduct,
    pub supplier_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortionedEntry {
    pub id: PortionedEntryId,
    pub store_id: StoreId,
    pub portioned_product_id: PortionedProductId,
    /// Snapshot of the product's raw protein at entry time.
    pub protein_name: String,
    pub supplier_id: Option<SupplierId>,
    pub price: f64,
    pub entry_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PortionedEntryDraft {
    pub portioned_product_id: PortionedProductId,
    pub protein_name: String,
    pub supplier_id: Option<SupplierId>,
    pub price: f64,
    pub entry_date: NaiveDate,
}

impl PortionedEntryDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.protein_name.trim().is_empty() {
            return Err(DomainError::validation(
                "proteinName",
                "Protein name is required",
            ));
        }
        if self.price < 0.0 || !self.price.is_finite() {
            return Err(DomainError::validation(
                "price",
                "Price must be a non-negative number",
            ));
        }
        Ok(())
    }

    pub fn into_entry(
        self,
        store_id: StoreId,
        now: DateTime<Utc>,
    ) -> Result<PortionedEntry, DomainError> {
        self.validate()?;
        Ok(PortionedEntry {
            id: PortionedEntryId::new(),
            store_id,
            portioned_product_id: self.portioned_product_id,
            protein_name: self.protein_name,
            supplier_id: self.supplier_id,
            price: self.price,
            entry_date: self.entry_date,
            created_at: now,
        })
    }
}

/// An entry as listed, with the supplier name joined in.
#[derive(Debug, Clone)]
pub struct PortionedEntryView {
    pub record: PortionedEntry,
    pub supplier_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_draft() -> PortionedProductDraft {
        PortionedProductDraft {
            raw_protein: "Salmon".to_string(),
            portioned_product: "Salmon fillet".to_string(),
            standard_weight: 180.0,
            target_yield: 62.0,
            tolerance: 3.0,
            supplier_id: None,
            operator_name: Some("Rafael".to_string()),
        }
    }

    #[test]
    fn product_draft_accepts_complete_input() {
        assert!(product_draft().validate().is_ok());
    }

    #[test]
    fn product_draft_requires_names_and_positive_weight() {
        let mut d = product_draft();
        d.raw_protein = " ".to_string();
        assert!(d.validate().is_err());

        let mut d = product_draft();
        d.portioned_product = "".to_string();
        assert!(d.validate().is_err());

        let mut d = product_draft();
        d.standard_weight = 0.0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn entry_draft_rejects_negative_price() {
        let d = PortionedEntryDraft {
            portioned_product_id: PortionedProductId::new(),
            protein_name: "Salmon".to_string(),
            supplier_id: None,
            price: -5.0,
            entry_date: "2024-05-02".parse().unwrap(),
        };
        assert!(d.validate().is_err());
    }

    #[test]
    fn entry_keeps_protein_snapshot() {
        let d = PortionedEntryDraft {
            portioned_product_id: PortionedProductId::new(),
            protein_name: "Salmon".to_string(),
            supplier_id: None,
            price: 42.0,
            entry_date: "2024-05-02".parse().unwrap(),
        };
        let entry = d.into_entry(StoreId::new(), Utc::now()).unwrap();
        assert_eq!(entry.protein_name, "Salmon");
    }
}
