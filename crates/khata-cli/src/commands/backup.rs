use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use clap::{Args, Subcommand};
use inquire::Confirm;

use khata_backup::{
    backup_info, parse_backup, restore_from_file, share_backup, ShareStatus, ShareTarget,
};
use khata_data::ClearAll;
use khata_db::Database;

#[derive(Subcommand, Debug)]
pub enum Backups {
    /// Write a backup file and offer it for sharing
    #[clap(name = "create")]
    Create(CreateBackup),
    /// Replace all data with the contents of a backup file
    #[clap(name = "restore")]
    Restore(RestoreBackup),
    /// Show what a backup taken now would contain
    #[clap(name = "info")]
    Info(BackupInfoCmd),
}

impl Backups {
    pub async fn run(self, db: &Database) -> Result<()> {
        match self {
            Backups::Create(cmd) => cmd.run(db).await,
            Backups::Restore(cmd) => cmd.run(db).await,
            Backups::Info(cmd) => cmd.run(db).await,
        }
    }
}

/// The console stands in for the platform share sheet: it hands
/// the file path to the user.
struct ConsoleShare;

#[async_trait]
impl ShareTarget for ConsoleShare {
    async fn share(&self, path: &Path) -> Result<ShareStatus> {
        println!("Backup ready to share: {}", path.display());
        Ok(ShareStatus::Shared)
    }
}

#[derive(Args, Debug)]
pub struct CreateBackup {
    /// Directory the backup file is written into
    #[clap(short, long, default_value = ".")]
    pub dir: PathBuf,
}

impl CreateBackup {
    pub async fn run(self, db: &Database) -> Result<()> {
        let (backup, _status) = share_backup(db, &self.dir, &ConsoleShare).await?;
        println!(
            "{} persons, {} transactions.",
            backup.snapshot.persons.len(),
            backup.snapshot.transactions.len()
        );

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct RestoreBackup {
    /// Backup file to restore from
    pub path: PathBuf,
}

impl RestoreBackup {
    pub async fn run(self, db: &Database) -> Result<()> {
        // Validate the document before touching the store.
        let json = tokio::fs::read_to_string(&self.path).await?;
        let incoming = parse_backup(&json)?;

        let current = backup_info(db).await?;
        println!(
            "Restore would replace {} persons and {} transactions",
            current.person_count, current.transaction_count
        );
        println!(
            "with {} persons and {} transactions (exported {}).",
            incoming.persons.len(),
            incoming.transactions.len(),
            incoming.export_date
        );

        let confirm = Confirm::new("Discard all existing data and restore from this file?")
            .with_default(false);
        if !confirm.prompt()? {
            return Ok(());
        }

        let restored = restore_from_file(db, &self.path).await?;
        println!(
            "Restore complete: {} persons, {} transactions.",
            restored.persons.len(),
            restored.transactions.len()
        );

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ClearData {}

impl ClearData {
    pub async fn run(self, db: &Database) -> Result<()> {
        let info = backup_info(db).await?;

        let message = format!(
            "Delete all {} persons and {} transactions?",
            info.person_count, info.transaction_count
        );
        let confirm = Confirm::new(&message).with_default(false);
        if !confirm.prompt()? {
            return Ok(());
        }

        db.clear_all().await?;
        println!("All data deleted.");

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct BackupInfoCmd {}

impl BackupInfoCmd {
    pub async fn run(self, db: &Database) -> Result<()> {
        let info = backup_info(db).await?;

        println!("Persons:\t{}", info.person_count);
        println!("Transactions:\t{}", info.transaction_count);
        println!("Version:\t{}", info.version);
        println!("As of:\t\t{}", info.export_date);

        Ok(())
    }
}
