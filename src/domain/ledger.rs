//! The financial ledger: transactions, daily revenues, and monthly goals.
//!
//! Daily revenues and goals are upsert kinds — one row per
//! (store, date) and (store, month) respectively, last write wins.
//! The revenue `total` is always recomputed from its three components;
//! whatever a client supplies for it is discarded.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::foundation::{DomainError, GoalId, GroupId, RevenueId, StoreId, SupplierId, TransactionId};

// ════════════════════════════════════════════════════════════════════════════
// Transactions
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
    Purchase,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
            TransactionType::Purchase => "PURCHASE",
        }
    }

    pub fn parse(s: &str) -> Option<TransactionType> {
        match s {
            "INCOME" => Some(TransactionType::Income),
            "EXPENSE" => Some(TransactionType::Expense),
            "PURCHASE" => Some(TransactionType::Purchase),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub store_id: StoreId,
    pub kind: TransactionType,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub group_id: Option<GroupId>,
    pub supplier_id: Option<SupplierId>,
    pub invoice_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Mutable fields of a transaction, as accepted on create and update.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionType,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub group_id: Option<GroupId>,
    pub supplier_id: Option<SupplierId>,
    pub invoice_number: Option<String>,
}

impl TransactionDraft {
    /// Required fields: description, non-negative amount, group.
    /// A supplier on PURCHASE rows is UI policy, not enforced here.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.description.trim().is_empty() {
            return Err(DomainError::validation(
                "description",
                "Description is required",
            ));
        }
        if self.amount < 0.0 || !self.amount.is_finite() {
            return Err(DomainError::validation(
                "amount",
                "Amount must be a non-negative number",
            ));
        }
        if self.group_id.is_none() {
            return Err(DomainError::validation("groupId", "Group is required"));
        }
        Ok(())
    }

    pub fn into_transaction(
        self,
        store_id: StoreId,
        now: DateTime<Utc>,
    ) -> Result<Transaction, DomainError> {
        self.validate()?;
        Ok(Transaction {
            id: TransactionId::new(),
            store_id,
            kind: self.kind,
            description: self.description,
            amount: self.amount,
            date: self.date,
            due_date: self.due_date,
            group_id: self.group_id,
            supplier_id: self.supplier_id,
            invoice_number: self.invoice_number,
            created_at: now,
        })
    }

    /// Overwrites the mutable fields of an existing row.
    pub fn apply_to(self, existing: &mut Transaction) -> Result<(), DomainError> {
        self.validate()?;
        existing.kind = self.kind;
        existing.description = self.description;
        existing.amount = self.amount;
        existing.date = self.date;
        existing.due_date = self.due_date;
        existing.group_id = self.group_id;
        existing.supplier_id = self.supplier_id;
        existing.invoice_number = self.invoice_number;
        Ok(())
    }
}

/// A transaction as listed, enriched with the names of its group and
/// supplier references.
#[derive(Debug, Clone)]
pub struct TransactionView {
    pub record: Transaction,
    pub group_name: Option<String>,
    pub supplier_name: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Daily revenues
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub id: RevenueId,
    pub store_id: StoreId,
    pub date: NaiveDate,
    pub salon: f64,
    pub delivery: f64,
    pub service_charge: f64,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

impl DailyRevenue {
    /// Builds a revenue row for one day. `total` is derived here and
    /// nowhere else.
    pub fn compose(
        store_id: StoreId,
        date: NaiveDate,
        salon: f64,
        delivery: f64,
        service_charge: f64,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        for (field, value) in [
            ("salon", salon),
            ("delivery", delivery),
            ("serviceCharge", service_charge),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(DomainError::validation(
                    field,
                    "Amount must be a non-negative number",
                ));
            }
        }
        Ok(Self {
            id: RevenueId::new(),
            store_id,
            date,
            salon,
            delivery,
            service_charge,
            total: salon + delivery + service_charge,
            created_at: now,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Months and goals
// ════════════════════════════════════════════════════════════════════════════

/// A calendar month in `YYYY-MM` form — the goal upsert key and the
/// dashboard aggregation window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Month(String);

impl Month {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && s[..4].chars().all(|c| c.is_ascii_digit())
            && s[5..].chars().all(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(DomainError::validation("month", "Month must be YYYY-MM"));
        }
        let mm: u32 = s[5..].parse().unwrap_or(0);
        if !(1..=12).contains(&mm) {
            return Err(DomainError::validation("month", "Month must be 01 through 12"));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the given date falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.format("%Y-%m").to_string() == self.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreGoal {
    pub id: GoalId,
    pub store_id: StoreId,
    pub month: Month,
    pub revenue_target: f64,
    pub cmc_target: f64,
    pub avg_ticket: f64,
    pub created_at: DateTime<Utc>,
}

impl StoreGoal {
    pub fn compose(
        store_id: StoreId,
        month: Month,
        revenue_target: f64,
        cmc_target: f64,
        avg_ticket: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: GoalId::new(),
            store_id,
            month,
            revenue_target,
            cmc_target,
            avg_ticket,
            created_at: now,
        }
    }
}
