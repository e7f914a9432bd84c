use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    Connection as SqlConnection,
};
use tokio::sync::Mutex;

use crate::schema;

/// A thread safe connection to the database
pub type Connection = Arc<Mutex<SqliteConnection>>;

/// Open a connection to the database. The database file is
/// created when missing and the schema is installed, so a
/// repeated open of the same file is a no-op apart from the
/// new handle.
pub async fn open(filename: &str) -> Result<Connection> {
    let opts = SqliteConnectOptions::from_str(filename)
        .with_context(|| format!("invalid database path: {}", filename))?
        .create_if_missing(true)
        .foreign_keys(true);
    let conn = SqliteConnection::connect_with(&opts)
        .await
        .with_context(|| format!("could not open database: {}", filename))?;
    let conn = Arc::new(Mutex::new(conn));
    schema::install(&conn).await?;
    Ok(conn)
}

/// Generate a fresh test database filename.
pub fn test_filename() -> String {
    format!("/tmp/khata_test_{}.sqlite3", rand::random::<u64>())
}

pub struct TestHandle {
    filename: String,
}

impl TestHandle {
    pub fn new(filename: String) -> Self {
        Self { filename }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl Drop for TestHandle {
    fn drop(&mut self) {
        let path = Path::new(&self.filename);
        if path.exists() {
            fs::remove_file(path).unwrap();
        }
    }
}

/// Open a new test database connection.
/// The database will be created on each open.
pub async fn open_test() -> (TestHandle, Connection) {
    let handle = TestHandle::new(test_filename());
    let conn = open(handle.filename()).await.unwrap();
    (handle, conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_creates_database() {
        let (handle, _conn) = open_test().await;
        assert!(Path::new(handle.filename()).exists());
    }

    #[tokio::test]
    async fn test_open_is_repeatable() {
        let (handle, conn) = open_test().await;
        drop(conn);

        // A second open of the same file must succeed.
        let _conn = open(handle.filename()).await.unwrap();
    }
}
