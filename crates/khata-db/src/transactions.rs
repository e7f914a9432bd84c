use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};
use tracing::warn;

use khata_data::{Delete, Query, Retrieve, Transaction, TransactionFilter, Upsert};

use crate::{results::QueryError, Connection};

#[async_trait]
impl Query<Transaction> for Connection {
    type Filter = TransactionFilter;

    /// List transactions, newest first. An engine error on this
    /// read path degrades to an empty result.
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<Transaction>> {
        let mut conn = self.lock().await;
        let mut qry = QueryBuilder::new(
            r#"
            SELECT
                id,
                personId,
                amount,
                type,
                description,
                date,
                createdAt
            FROM transactions
            WHERE 1
            "#,
        );

        if let Some(id) = filter.id.clone() {
            qry.push(" AND id = ").push_bind(id);
        }
        if let Some(person_id) = filter.person_id.clone() {
            qry.push(" AND personId = ").push_bind(person_id);
        }
        if let Some(kind) = filter.kind {
            qry.push(" AND type = ").push_bind(kind);
        }
        if let Some(date_before) = filter.date_before {
            qry.push(" AND date <= ").push_bind(date_before);
        }
        if let Some(date_after) = filter.date_after {
            qry.push(" AND date >= ").push_bind(date_after);
        }
        qry.push(" ORDER BY date DESC");

        let transactions = match qry.build_query_as().fetch_all(&mut *conn).await {
            Ok(transactions) => transactions,
            Err(err) => {
                warn!("transaction query failed, returning empty result: {}", err);
                Vec::new()
            }
        };
        Ok(transactions)
    }
}

#[async_trait]
impl Retrieve<Transaction> for Connection {
    type Key = String;

    async fn retrieve(&self, transaction_id: Self::Key) -> Result<Transaction> {
        let filter = TransactionFilter {
            id: Some(transaction_id),
            ..Default::default()
        };
        let transaction = self
            .query(&filter)
            .await?
            .pop()
            .ok_or(QueryError::NotFound)?;
        Ok(transaction)
    }
}

#[async_trait]
impl Upsert<Transaction> for Connection {
    /// Insert or replace a transaction, keyed on id. The person
    /// must exist; the foreign key rejects the write otherwise.
    async fn upsert(&self, transaction: Transaction) -> Result<Transaction> {
        {
            let mut conn = self.lock().await;
            let mut qry = QueryBuilder::<Sqlite>::new(
                r#"INSERT OR REPLACE INTO transactions (
                    id,
                    personId,
                    amount,
                    type,
                    description,
                    date,
                    createdAt
                ) VALUES (
                "#,
            );
            qry.separated(", ")
                .push_bind(&transaction.id)
                .push_bind(&transaction.person_id)
                .push_bind(transaction.amount)
                .push_bind(transaction.kind)
                .push_bind(&transaction.description)
                .push_bind(transaction.date)
                .push_bind(transaction.created_at);

            qry.push(")").build().execute(&mut *conn).await?;
        }
        self.retrieve(transaction.id).await
    }
}

#[async_trait]
impl Delete<Transaction> for Connection {
    /// Delete a transaction; a missing id is a no-op.
    async fn delete(&self, transaction: Transaction) -> Result<()> {
        let mut conn = self.lock().await;
        QueryBuilder::<Sqlite>::new("DELETE FROM transactions WHERE id = ")
            .push_bind(transaction.id)
            .build()
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
