//! The purchasing catalog: suppliers and product groups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::foundation::{DomainError, GroupId, StoreId, SupplierId};

pub const DEFAULT_GROUP_COLOR: &str = "#3b82f6";
pub const DEFAULT_GROUP_ICON: &str = "Package";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub store_id: StoreId,
    pub name: String,
    pub contact: String,
    pub email: String,
    /// Comma-separated tag list, kept verbatim as entered.
    pub categories: String,
    pub created_at: DateTime<Utc>,
}

/// Mutable supplier fields, as accepted on create and update.
#[derive(Debug, Clone, Default)]
pub struct SupplierDraft {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub categories: String,
}

impl SupplierDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name", "Supplier name is required"));
        }
        Ok(())
    }

    pub fn into_supplier(
        self,
        store_id: StoreId,
        now: DateTime<Utc>,
    ) -> Result<Supplier, DomainError> {
        self.validate()?;
        Ok(Supplier {
            id: SupplierId::new(),
            store_id,
            name: self.name,
            contact: self.contact,
            email: self.email,
            categories: self.categories,
            created_at: now,
        })
    }

    pub fn apply_to(self, existing: &mut Supplier) -> Result<(), DomainError> {
        self.validate()?;
        existing.name = self.name;
        existing.contact = self.contact;
        existing.email = self.email;
        existing.categories = self.categories;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductGroup {
    pub id: GroupId,
    pub store_id: StoreId,
    pub name: String,
    pub color: String,
    pub cmc_target: f64,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

/// Mutable product-group fields. Color and icon fall back to the
/// application defaults when left empty.
#[derive(Debug, Clone, Default)]
pub struct GroupDraft {
    pub name: String,
    pub color: Option<String>,
    pub cmc_target: f64,
    pub icon: Option<String>,
}

impl GroupDraft {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name", "Group name is required"));
        }
        Ok(())
    }

    pub fn into_group(
        self,
        store_id: StoreId,
        now: DateTime<Utc>,
    ) -> Result<ProductGroup, DomainError> {
        self.validate()?;
        Ok(ProductGroup {
            id: GroupId::new(),
            store_id,
            name: self.name,
            color: self
                .color
                .unwrap_or_else(|| DEFAULT_GROUP_COLOR.to_string()),
            cmc_target: self.cmc_target,
            icon: self.icon.unwrap_or_else(|| DEFAULT_GROUP_ICON.to_string()),
            created_at: now,
        })
    }

    pub fn apply_to(self, existing: &mut ProductGroup) -> Result<(), DomainError> {
        self.validate()?;
        existing.name = self.name;
        if let Some(color) = self.color {
            existing.color = color;
        }
        existing.cmc_target = self.cmc_target;
        if let Some(icon) = self.icon {
            existing.icon = icon;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplier_requires_name() {
        let draft = SupplierDraft {
            name: "".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn group_defaults_color_and_icon() {
        let group = GroupDraft {
            name: "Proteins".to_string(),
            color: None,
            cmc_target: 30.0,
            icon: None,
        }
        .into_group(StoreId::new(), Utc::now())
        .unwrap();

        assert_eq!(group.color, DEFAULT_GROUP_COLOR);
        assert_eq!(group.icon, DEFAULT_GROUP_ICON);
        assert_eq!(group.cmc_target, 30.0);
    }

    #[test]
    fn group_update_keeps_color_when_not_supplied() {
        let mut group = GroupDraft {
            name: "Proteins".to_string(),
            color: Some("#ff0000".to_string()),
            cmc_target: 30.0,
            icon: None,
        }
        .into_group(StoreId::new(), Utc::now())
        .unwrap();

        GroupDraft {
            name: "Meats".to_string(),
            color: None,
            cmc_target: 28.0,
            icon: None,
        }
        .apply_to(&mut group)
        .unwrap();

        assert_eq!(group.name, "Meats");
        assert_eq!(group.color, "#ff0000");
    }
}
