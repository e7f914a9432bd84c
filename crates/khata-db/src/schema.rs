use anyhow::{Context, Result};

use crate::Connection;

/// Column names mirror the backup document keys, so a row maps
/// onto an entity without renaming on the wire.
const SCHEMA: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS persons (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        phone TEXT NOT NULL DEFAULT '',
        email TEXT NOT NULL DEFAULT '',
        imageUri TEXT,
        createdAt TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id TEXT PRIMARY KEY,
        personId TEXT NOT NULL,
        amount REAL NOT NULL,
        type TEXT NOT NULL CHECK (type IN ('credit', 'debit')),
        description TEXT NOT NULL DEFAULT '',
        date TEXT NOT NULL,
        createdAt TEXT NOT NULL,
        FOREIGN KEY (personId) REFERENCES persons (id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_transactions_personId ON transactions (personId)",
    "CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions (date)",
];

/// Install the database schema. Safe to call on an already
/// initialized database.
pub async fn install(conn: &Connection) -> Result<()> {
    let mut conn = conn.lock().await;
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(&mut *conn)
            .await
            .context("could not install database schema")?;
    }
    Ok(())
}
