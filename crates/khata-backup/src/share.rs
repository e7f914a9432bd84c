use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use khata_data::ExportSnapshot;

use crate::{create_backup, BackupFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareStatus {
    Shared,
    Dismissed,
}

/// Hand-off point to whatever the platform offers for sharing a
/// file. The ledger only cares whether the user went through with
/// it.
#[async_trait]
pub trait ShareTarget {
    async fn share(&self, path: &Path) -> Result<ShareStatus>;
}

/// Create a backup and hand the file to the share target.
pub async fn share_backup<DB, S>(db: &DB, dir: &Path, target: &S) -> Result<(BackupFile, ShareStatus)>
where
    DB: ExportSnapshot + Send + Sync,
    S: ShareTarget + Send + Sync,
{
    let backup = create_backup(db, dir).await?;
    let status = target.share(&backup.path).await?;
    Ok((backup, status))
}
