use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Direction of a transaction: `credit` is money given to a
/// person, `debit` is money taken from them. The amount itself
/// is always a positive magnitude.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TxnKind {
    #[default]
    Credit,
    Debit,
}

impl TxnKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "credit" => Some(TxnKind::Credit),
            "debit" => Some(TxnKind::Debit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TxnKind::Credit => "credit",
            TxnKind::Debit => "debit",
        }
    }
}

impl fmt::Display for TxnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub id: Option<String>,
    pub person_id: Option<String>,
    pub kind: Option<TxnKind>,
    pub date_before: Option<DateTime<Utc>>,
    pub date_after: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[sqlx(rename = "personId")]
    pub person_id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: TxnKind,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction, stamped with the current time.
    /// Without an explicit date the transaction dates to now.
    pub fn new(
        id: impl Into<String>,
        person_id: impl Into<String>,
        amount: f64,
        kind: TxnKind,
        date: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            person_id: person_id.into(),
            amount,
            kind,
            date: date.unwrap_or(now),
            created_at: now,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!(TxnKind::parse("credit"), Some(TxnKind::Credit));
        assert_eq!(TxnKind::parse("debit"), Some(TxnKind::Debit));
        assert_eq!(TxnKind::parse("transfer"), None);
        assert_eq!(TxnKind::parse("Credit"), None);
    }

    #[test]
    fn test_transaction_json_round_trip() {
        let tx = Transaction {
            description: "lunch money".to_string(),
            ..Transaction::new("t1", "p1", 100.0, TxnKind::Credit, None)
        };

        let json = serde_json::to_string(&tx).unwrap();
        let decoded: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, tx);
    }

    #[test]
    fn test_transaction_kind_serializes_as_type() {
        let tx = Transaction::new("t1", "p1", 30.0, TxnKind::Debit, None);
        let json = serde_json::to_value(&tx).unwrap();

        assert_eq!(json["type"], "debit");
        assert_eq!(json["personId"], "p1");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_transaction_defaults_date_to_creation() {
        let tx = Transaction::new("t1", "p1", 10.0, TxnKind::Credit, None);
        assert_eq!(tx.date, tx.created_at);
    }
}
