use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use khata_data::{ImportSnapshot, Snapshot};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BackupError {
    #[error("Invalid backup file format: {0}")]
    InvalidFormat(String),
}

/// Parse and validate a backup document. A document that is not
/// JSON, or is missing the persons or transactions array, is
/// rejected here, before any store mutation.
pub fn parse_backup(json: &str) -> Result<Snapshot, BackupError> {
    let doc: Value = serde_json::from_str(json)
        .map_err(|err| BackupError::InvalidFormat(format!("not valid JSON: {}", err)))?;

    let obj = doc
        .as_object()
        .ok_or_else(|| BackupError::InvalidFormat("not a JSON object".to_string()))?;
    if !obj.get("persons").map_or(false, Value::is_array) {
        return Err(BackupError::InvalidFormat(
            "missing persons array".to_string(),
        ));
    }
    if !obj.get("transactions").map_or(false, Value::is_array) {
        return Err(BackupError::InvalidFormat(
            "missing transactions array".to_string(),
        ));
    }

    serde_json::from_value(doc)
        .map_err(|err| BackupError::InvalidFormat(err.to_string()))
}

/// Restore the store from a backup file: read, validate, then
/// replace all contents atomically. The previous contents survive
/// any failure.
pub async fn restore_from_file<DB>(db: &DB, path: &Path) -> Result<Snapshot>
where
    DB: ImportSnapshot + Send + Sync,
{
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("could not read backup file: {}", path.display()))?;
    let snapshot = parse_backup(&json)?;

    db.import_snapshot(&snapshot).await?;
    info!(
        "restored {} persons and {} transactions from {}",
        snapshot.persons.len(),
        snapshot.transactions.len(),
        path.display()
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    use khata_data::{ExportSnapshot, Person, Query, PersonFilter, Transaction, TxnKind, Upsert};
    use khata_db::connection;

    #[test]
    fn test_parse_backup_rejects_incomplete_documents() {
        assert!(matches!(
            parse_backup("{}"),
            Err(BackupError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_backup(r#"{"persons": []}"#),
            Err(BackupError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_backup(r#"{"transactions": []}"#),
            Err(BackupError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_backup("[]"),
            Err(BackupError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_backup("not json at all"),
            Err(BackupError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_backup_accepts_minimal_document() {
        let snapshot = parse_backup(r#"{"persons": [], "transactions": []}"#).unwrap();
        assert!(snapshot.persons.is_empty());
        assert!(snapshot.transactions.is_empty());
    }

    #[tokio::test]
    async fn test_restore_from_file() {
        let (_handle, conn) = connection::open_test().await;
        conn.upsert(Person::new("old", "Old Person")).await.unwrap();

        let snapshot = Snapshot::new(
            vec![Person::new("p1", "Alice")],
            vec![Transaction::new("t1", "p1", 100.0, TxnKind::Credit, None)],
        );
        let path = std::env::temp_dir().join(format!(
            "khata_restore_test_{}.json",
            rand::random::<u64>()
        ));
        tokio::fs::write(&path, serde_json::to_string(&snapshot).unwrap())
            .await
            .unwrap();

        let restored = restore_from_file(&conn, &path).await.unwrap();
        assert_eq!(restored, snapshot);

        let persons = conn.query(&PersonFilter::default()).await.unwrap();
        assert_eq!(persons, snapshot.persons);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_restore_invalid_file_leaves_store_unchanged() {
        let (_handle, conn) = connection::open_test().await;
        conn.upsert(Person::new("p1", "Alice")).await.unwrap();
        let before = conn.export_snapshot().await.unwrap();

        let path = std::env::temp_dir().join(format!(
            "khata_restore_test_{}.json",
            rand::random::<u64>()
        ));
        tokio::fs::write(&path, r#"{"persons": []}"#).await.unwrap();

        let result = restore_from_file(&conn, &path).await;
        assert!(result.is_err());

        let after = conn.export_snapshot().await.unwrap();
        assert_eq!(after.persons, before.persons);
        assert_eq!(after.transactions, before.transactions);

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
