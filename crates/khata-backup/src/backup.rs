use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use khata_data::{ExportSnapshot, Snapshot};

/// A backup written to disk.
#[derive(Debug, Clone)]
pub struct BackupFile {
    pub path: PathBuf,
    pub snapshot: Snapshot,
}

/// Export the full store contents and write them as a pretty
/// printed JSON document into `dir`. The filename carries the
/// export time so successive backups never collide.
pub async fn create_backup<DB>(db: &DB, dir: &Path) -> Result<BackupFile>
where
    DB: ExportSnapshot + Send + Sync,
{
    let snapshot = db.export_snapshot().await?;
    let json = serde_json::to_string_pretty(&snapshot)?;

    let filename = format!(
        "khata_backup_{}.json",
        snapshot.export_date.timestamp_millis()
    );
    let path = dir.join(filename);
    tokio::fs::write(&path, json)
        .await
        .with_context(|| format!("could not write backup file: {}", path.display()))?;

    info!(
        "backup written: {} ({} persons, {} transactions)",
        path.display(),
        snapshot.persons.len(),
        snapshot.transactions.len()
    );
    Ok(BackupFile { path, snapshot })
}
