use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use khata_data::ExportSnapshot;

/// Summary of what a backup taken right now would contain.
#[derive(Debug, Clone, Serialize)]
pub struct BackupInfo {
    pub person_count: usize,
    pub transaction_count: usize,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

/// Count the current store contents. Works against any store
/// handle, including one that has not been opened yet: the
/// database initializes itself on first use.
pub async fn backup_info<DB>(db: &DB) -> Result<BackupInfo>
where
    DB: ExportSnapshot + Send + Sync,
{
    let snapshot = db.export_snapshot().await?;
    Ok(BackupInfo {
        person_count: snapshot.persons.len(),
        transaction_count: snapshot.transactions.len(),
        export_date: snapshot.export_date,
        version: snapshot.version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use khata_data::{Person, Transaction, TxnKind, Upsert, SNAPSHOT_VERSION};
    use khata_db::{connection, Database};

    #[tokio::test]
    async fn test_backup_info_counts() {
        let (_handle, conn) = connection::open_test().await;
        conn.upsert(Person::new("p1", "Alice")).await.unwrap();
        conn.upsert(Person::new("p2", "Bob")).await.unwrap();
        conn.upsert(Transaction::new("t1", "p1", 100.0, TxnKind::Credit, None))
            .await
            .unwrap();

        let info = backup_info(&conn).await.unwrap();
        assert_eq!(info.person_count, 2);
        assert_eq!(info.transaction_count, 1);
        assert_eq!(info.version, SNAPSHOT_VERSION);
    }

    #[tokio::test]
    async fn test_backup_info_self_initializes() {
        // No explicit open beforehand; the guarded database handle
        // initializes on the first operation.
        let handle = connection::TestHandle::new(connection::test_filename());
        let db = Database::new(handle.filename());

        let info = backup_info(&db).await.unwrap();
        assert_eq!(info.person_count, 0);
        assert_eq!(info.transaction_count, 0);
    }
}
