//! Transaction model
//!
//! Represents a single recorded income or expense event. The serialized field
//! names (`type`, `createdAt`, `updatedAt`) match the persisted blob layout;
//! any structural change to this format is a breaking change.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A recorded income or expense event
///
/// The `date` field carries the calendar date the transaction is attributed
/// to, as supplied by the caller (normally `YYYY-MM-DD`). It is stored
/// verbatim and parsed lazily; a record with an unparsable date still
/// participates in type-based sums but matches no month bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, generated at creation, immutable thereafter
    pub id: TransactionId,

    /// Amount in currency units, always > 0 (validated before the store)
    pub amount: f64,

    /// Calendar date the transaction is attributed to
    pub date: String,

    /// Free-text label, 1-200 characters (validated before the store)
    pub description: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// When the record was created (stamped by the store)
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// When the record was last modified (stamped by the store)
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Assemble a transaction from validated input, stamping id and timestamps
    pub fn from_input(input: NewTransaction, now: DateTime<Utc>) -> Self {
        Self {
            id: TransactionId::new(),
            amount: input.amount,
            date: input.date,
            description: input.description,
            kind: input.kind,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Parse the attributed calendar date, if possible
    ///
    /// Accepts `YYYY-MM-DD` and falls back to RFC 3339 datetimes, covering
    /// both formats legacy blobs contain.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        if let Ok(date) = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            return Some(date);
        }
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|dt| dt.date_naive())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.2}", self.date, self.kind, self.amount)
    }
}

/// Caller-supplied fields for creating a transaction
///
/// The store assigns `id` and timestamps; callers never provide them.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    pub date: String,
    pub description: String,
    pub kind: TransactionType,
}

/// Partial update for an existing transaction
///
/// Absent fields leave the record untouched; `id` and `created_at` can never
/// be changed through a patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub kind: Option<TransactionType>,
}

impl TransactionPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the amount
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the transaction type
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Check whether the patch changes anything
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.kind.is_none()
    }

    /// Merge this patch over an existing record, refreshing `updated_at`
    pub fn apply_to(self, txn: &mut Transaction, now: DateTime<Utc>) {
        if let Some(amount) = self.amount {
            txn.amount = amount;
        }
        if let Some(date) = self.date {
            txn.date = date;
        }
        if let Some(description) = self.description {
            txn.description = description;
        }
        if let Some(kind) = self.kind {
            txn.kind = kind;
        }
        txn.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    fn test_input() -> NewTransaction {
        NewTransaction {
            amount: 120.50,
            date: "2026-03-14".to_string(),
            description: "Groceries".to_string(),
            kind: TransactionType::Expense,
        }
    }

    #[test]
    fn test_from_input_stamps_id_and_timestamps() {
        let now = test_now();
        let txn = Transaction::from_input(test_input(), now);

        assert!(!txn.id.as_uuid().is_nil());
        assert_eq!(txn.amount, 120.50);
        assert_eq!(txn.date, "2026-03-14");
        assert_eq!(txn.description, "Groceries");
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.created_at, now);
        assert_eq!(txn.updated_at, now);
    }

    #[test]
    fn test_income_expense_checks() {
        let now = test_now();
        let expense = Transaction::from_input(test_input(), now);
        assert!(expense.is_expense());
        assert!(!expense.is_income());

        let mut input = test_input();
        input.kind = TransactionType::Income;
        let income = Transaction::from_input(input, now);
        assert!(income.is_income());
        assert!(!income.is_expense());
    }

    #[test]
    fn test_wire_field_names() {
        let txn = Transaction::from_input(test_input(), test_now());
        let json = serde_json::to_string(&txn).unwrap();

        assert!(json.contains("\"type\":\"expense\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(!json.contains("\"kind\""));
        assert!(!json.contains("\"created_at\""));
    }

    #[test]
    fn test_deserializes_original_blob_record() {
        // Record shape as written by the original browser app
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": 2500.75,
            "date": "2026-01-31",
            "description": "Salary",
            "type": "income",
            "createdAt": "2026-01-31T08:00:00.000Z",
            "updatedAt": "2026-02-01T10:15:00.000Z"
        }"#;

        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.amount, 2500.75);
        assert_eq!(txn.kind, TransactionType::Income);
        assert_eq!(txn.date, "2026-01-31");
    }

    #[test]
    fn test_serde_round_trip() {
        let txn = Transaction::from_input(test_input(), test_now());
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }

    #[test]
    fn test_parsed_date() {
        let mut txn = Transaction::from_input(test_input(), test_now());
        assert_eq!(
            txn.parsed_date(),
            NaiveDate::from_ymd_opt(2026, 3, 14)
        );

        txn.date = "2026-03-14T12:00:00Z".to_string();
        assert_eq!(
            txn.parsed_date(),
            NaiveDate::from_ymd_opt(2026, 3, 14)
        );

        txn.date = "not a date".to_string();
        assert_eq!(txn.parsed_date(), None);
    }

    #[test]
    fn test_patch_apply() {
        let created = test_now();
        let later = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        let mut txn = Transaction::from_input(test_input(), created);
        let original_id = txn.id;

        TransactionPatch::new()
            .description("Weekly groceries")
            .apply_to(&mut txn, later);

        assert_eq!(txn.description, "Weekly groceries");
        assert_eq!(txn.amount, 120.50);
        assert_eq!(txn.id, original_id);
        assert_eq!(txn.created_at, created);
        assert_eq!(txn.updated_at, later);
    }

    #[test]
    fn test_empty_patch() {
        assert!(TransactionPatch::new().is_empty());
        assert!(!TransactionPatch::new().amount(5.0).is_empty());
    }
}
