use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::Connection as SqlConnection;
use tokio::sync::OnceCell;

use khata_data::{
    ClearAll, Delete, ExportSnapshot, ImportSnapshot, Person, PersonFilter, Query,
    Retrieve, Snapshot, Transaction, TransactionFilter, Upsert,
};

use crate::{connection, Connection};

/// An explicitly owned handle to the database with a guarded,
/// at-most-once initialization. The first call that needs the
/// connection opens the file and installs the schema; concurrent
/// first calls wait for that one initialization instead of racing
/// into their own. A failed initialization is returned to its
/// caller and the next call starts over.
pub struct Database {
    filename: String,
    conn: OnceCell<Connection>,
}

impl Database {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            conn: OnceCell::new(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get the connection, initializing the database on first use.
    pub async fn get(&self) -> Result<&Connection> {
        self.conn
            .get_or_try_init(|| connection::open(&self.filename))
            .await
    }

    /// Close the underlying connection, if this handle holds the
    /// last reference to it.
    pub async fn close(self) -> Result<()> {
        if let Some(conn) = self.conn.into_inner() {
            if let Ok(mutex) = Arc::try_unwrap(conn) {
                mutex.into_inner().close().await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Query<Person> for Database {
    type Filter = PersonFilter;
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<Person>> {
        self.get().await?.query(filter).await
    }
}

#[async_trait]
impl Query<Transaction> for Database {
    type Filter = TransactionFilter;
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<Transaction>> {
        self.get().await?.query(filter).await
    }
}

#[async_trait]
impl Retrieve<Person> for Database {
    type Key = String;
    async fn retrieve(&self, key: Self::Key) -> Result<Person> {
        self.get().await?.retrieve(key).await
    }
}

#[async_trait]
impl Retrieve<Transaction> for Database {
    type Key = String;
    async fn retrieve(&self, key: Self::Key) -> Result<Transaction> {
        self.get().await?.retrieve(key).await
    }
}

#[async_trait]
impl Upsert<Person> for Database {
    async fn upsert(&self, person: Person) -> Result<Person> {
        self.get().await?.upsert(person).await
    }
}

#[async_trait]
impl Upsert<Transaction> for Database {
    async fn upsert(&self, transaction: Transaction) -> Result<Transaction> {
        self.get().await?.upsert(transaction).await
    }
}

#[async_trait]
impl Delete<Person> for Database {
    async fn delete(&self, person: Person) -> Result<()> {
        self.get().await?.delete(person).await
    }
}

#[async_trait]
impl Delete<Transaction> for Database {
    async fn delete(&self, transaction: Transaction) -> Result<()> {
        self.get().await?.delete(transaction).await
    }
}

#[async_trait]
impl ExportSnapshot for Database {
    async fn export_snapshot(&self) -> Result<Snapshot> {
        self.get().await?.export_snapshot().await
    }
}

#[async_trait]
impl ImportSnapshot for Database {
    async fn import_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        self.get().await?.import_snapshot(snapshot).await
    }
}

#[async_trait]
impl ClearAll for Database {
    async fn clear_all(&self) -> Result<()> {
        self.get().await?.clear_all().await
    }
}
