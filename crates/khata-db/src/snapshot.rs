use anyhow::Result;
use async_trait::async_trait;
use sqlx::Connection as SqlConnection;

use khata_data::{
    ClearAll, ExportSnapshot, ImportSnapshot, PersonFilter, Query, Snapshot,
    TransactionFilter,
};

use crate::Connection;

#[async_trait]
impl ExportSnapshot for Connection {
    /// Capture the full store contents.
    async fn export_snapshot(&self) -> Result<Snapshot> {
        let persons = self.query(&PersonFilter::default()).await?;
        let transactions = self.query(&TransactionFilter::default()).await?;
        Ok(Snapshot::new(persons, transactions))
    }
}

#[async_trait]
impl ImportSnapshot for Connection {
    /// Replace the store contents with the snapshot. Runs as one
    /// engine transaction: a failure mid-way rolls back and the
    /// prior contents stay intact.
    async fn import_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        let mut conn = self.lock().await;
        let mut tx = conn.begin().await?;

        sqlx::query("DELETE FROM transactions")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM persons").execute(&mut *tx).await?;

        for person in &snapshot.persons {
            sqlx::query(
                r#"INSERT INTO persons (id, name, phone, email, imageUri, createdAt)
                VALUES (?, ?, ?, ?, ?, ?)"#,
            )
            .bind(&person.id)
            .bind(&person.name)
            .bind(&person.phone)
            .bind(&person.email)
            .bind(&person.image_uri)
            .bind(person.created_at)
            .execute(&mut *tx)
            .await?;
        }

        for transaction in &snapshot.transactions {
            sqlx::query(
                r#"INSERT INTO transactions (id, personId, amount, type, description, date, createdAt)
                VALUES (?, ?, ?, ?, ?, ?, ?)"#,
            )
            .bind(&transaction.id)
            .bind(&transaction.person_id)
            .bind(transaction.amount)
            .bind(transaction.kind)
            .bind(&transaction.description)
            .bind(transaction.date)
            .bind(transaction.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl ClearAll for Connection {
    /// Delete every row from both tables as one unit.
    async fn clear_all(&self) -> Result<()> {
        let mut conn = self.lock().await;
        let mut tx = conn.begin().await?;

        sqlx::query("DELETE FROM transactions")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM persons").execute(&mut *tx).await?;

        tx.commit().await?;
        Ok(())
    }
}
