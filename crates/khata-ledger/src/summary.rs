use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use khata_data::{Person, Query, Transaction, TransactionFilter};

use crate::{balance, given_total, taken_total};

/// Derived per-person statistics for display. Everything here is
/// computed from the person's transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonSummary {
    pub balance: f64,
    pub given_total: f64,
    pub taken_total: f64,
    pub last_transaction_date: Option<DateTime<Utc>>,
    pub transaction_count: usize,
}

impl PersonSummary {
    pub fn of(transactions: &[Transaction]) -> Self {
        Self {
            balance: balance(transactions),
            given_total: given_total(transactions),
            taken_total: taken_total(transactions),
            last_transaction_date: transactions.iter().map(|tx| tx.date).max(),
            transaction_count: transactions.len(),
        }
    }
}

#[async_trait]
pub trait Summarize {
    /// Compute the derived statistics for a person.
    async fn summary<DB>(&self, db: &DB) -> Result<PersonSummary>
    where
        DB: Query<Transaction, Filter = TransactionFilter> + Send + Sync;
}

#[async_trait]
impl Summarize for Person {
    async fn summary<DB>(&self, db: &DB) -> Result<PersonSummary>
    where
        DB: Query<Transaction, Filter = TransactionFilter> + Send + Sync,
    {
        let transactions = self.get_transactions(db).await?;
        Ok(PersonSummary::of(&transactions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    use khata_data::{Delete, TxnKind, Upsert};
    use khata_db::connection;

    #[test]
    fn test_summary_of_empty() {
        let summary = PersonSummary::of(&[]);
        assert_eq!(summary.balance, 0.0);
        assert_eq!(summary.last_transaction_date, None);
        assert_eq!(summary.transaction_count, 0);
    }

    #[tokio::test]
    async fn test_person_summary() {
        let (_handle, conn) = connection::open_test().await;
        let person = conn.upsert(Person::new("p1", "Alice")).await.unwrap();

        let d1 = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        let d2 = Utc.with_ymd_and_hms(2024, 2, 20, 9, 0, 0).unwrap();
        conn.upsert(Transaction::new("t1", "p1", 100.0, TxnKind::Credit, Some(d1)))
            .await
            .unwrap();
        conn.upsert(Transaction::new("t2", "p1", 30.0, TxnKind::Debit, Some(d2)))
            .await
            .unwrap();

        let summary = person.summary(&conn).await.unwrap();
        assert_eq!(summary.balance, 70.0);
        assert_eq!(summary.given_total, 100.0);
        assert_eq!(summary.taken_total, 30.0);
        assert_eq!(summary.last_transaction_date, Some(d2));
        assert_eq!(summary.transaction_count, 2);
    }

    #[tokio::test]
    async fn test_lend_and_settle_scenario() {
        let (_handle, conn) = connection::open_test().await;

        // A fresh person has balance 0.
        let alice = conn.upsert(Person::new("p1", "Alice")).await.unwrap();
        let summary = alice.summary(&conn).await.unwrap();
        assert_eq!(summary.balance, 0.0);

        // Give 100.
        conn.upsert(Transaction::new("t1", "p1", 100.0, TxnKind::Credit, None))
            .await
            .unwrap();
        let summary = alice.summary(&conn).await.unwrap();
        assert_eq!(summary.balance, 100.0);
        assert_eq!(summary.given_total, 100.0);
        assert_eq!(summary.taken_total, 0.0);

        // Take 30 back.
        conn.upsert(Transaction::new("t2", "p1", 30.0, TxnKind::Debit, None))
            .await
            .unwrap();
        let summary = alice.summary(&conn).await.unwrap();
        assert_eq!(summary.balance, 70.0);

        // Deleting the person removes their transactions.
        conn.delete(alice.clone()).await.unwrap();
        let transactions = alice.get_transactions(&conn).await.unwrap();
        assert!(transactions.is_empty());
    }

    #[tokio::test]
    async fn test_summary_only_counts_own_transactions() {
        let (_handle, conn) = connection::open_test().await;
        let person = conn.upsert(Person::new("p1", "Alice")).await.unwrap();
        conn.upsert(Person::new("p2", "Bob")).await.unwrap();

        conn.upsert(Transaction::new("t1", "p1", 100.0, TxnKind::Credit, None))
            .await
            .unwrap();
        conn.upsert(Transaction::new("t2", "p2", 500.0, TxnKind::Credit, None))
            .await
            .unwrap();

        let summary = person.summary(&conn).await.unwrap();
        assert_eq!(summary.balance, 100.0);
        assert_eq!(summary.transaction_count, 1);
    }
}
