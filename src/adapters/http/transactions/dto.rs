//! HTTP DTOs for transactions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GroupId, StoreId, SupplierId, TransactionId};
use crate::domain::ledger::{Transaction, TransactionDraft, TransactionType, TransactionView};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub store_id: StoreId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub group_id: Option<GroupId>,
    #[serde(default)]
    pub supplier_id: Option<SupplierId>,
    #[serde(default)]
    pub invoice_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub group_id: Option<GroupId>,
    #[serde(default)]
    pub supplier_id: Option<SupplierId>,
    #[serde(default)]
    pub invoice_number: Option<String>,
}

impl From<CreateTransactionRequest> for TransactionDraft {
    fn from(req: CreateTransactionRequest) -> Self {
        Self {
            kind: req.kind,
            description: req.description,
            amount: req.amount,
            date: req.date,
            due_date: req.due_date,
            group_id: req.group_id,
            supplier_id: req.supplier_id,
            invoice_number: req.invoice_number,
        }
    }
}

impl From<UpdateTransactionRequest> for TransactionDraft {
    fn from(req: UpdateTransactionRequest) -> Self {
        Self {
            kind: req.kind,
            description: req.description,
            amount: req.amount,
            date: req.date,
            due_date: req.due_date,
            group_id: req.group_id,
            supplier_id: req.supplier_id,
            invoice_number: req.invoice_number,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: TransactionId,
    pub store_id: StoreId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub group_id: Option<GroupId>,
    pub supplier_id: Option<SupplierId>,
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id,
            store_id: t.store_id,
            kind: t.kind,
            description: t.description,
            amount: t.amount,
            date: t.date,
            due_date: t.due_date,
            group_id: t.group_id,
            supplier_id: t.supplier_id,
            invoice_number: t.invoice_number,
            group_name: None,
            supplier_name: None,
            created_at: t.created_at,
        }
    }
}

impl From<TransactionView> for TransactionResponse {
    fn from(view: TransactionView) -> Self {
        let mut response: TransactionResponse = view.record.into();
        response.group_name = view.group_name;
        response.supplier_name = view.supplier_name;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_camel_case_payload() {
        let req: CreateTransactionRequest = serde_json::from_str(
            r#"{
                "storeId": "550e8400-e29b-41d4-a716-446655440000",
                "type": "PURCHASE",
                "description": "Beef shipment",
                "amount": 320.5,
                "date": "2024-05-02",
                "groupId": "550e8400-e29b-41d4-a716-446655440001",
                "invoiceNumber": "NF-1234"
            }"#,
        )
        .unwrap();
        assert_eq!(req.kind, TransactionType::Purchase);
        assert_eq!(req.invoice_number.as_deref(), Some("NF-1234"));
        assert!(req.supplier_id.is_none());
    }

    #[test]
    fn response_serializes_type_in_screaming_case() {
        let draft = TransactionDraft {
            kind: TransactionType::Purchase,
            description: "Beef".to_string(),
            amount: 10.0,
            date: "2024-05-02".parse().unwrap(),
            due_date: None,
            group_id: Some(GroupId::new()),
            supplier_id: None,
            invoice_number: None,
        };
        let t = draft.into_transaction(StoreId::new(), Utc::now()).unwrap();
        let json = serde_json::to_string(&TransactionResponse::from(t)).unwrap();
        assert!(json.contains("\"type\":\"PURCHASE\""));
        assert!(json.contains("storeId"));
        assert!(!json.contains("groupName"));
    }
}
