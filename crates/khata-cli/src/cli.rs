use clap::{Parser, Subcommand};

use crate::commands::{Backups, ClearData, Persons, Transactions};

#[derive(Parser, Debug)]
#[clap(name = "khata", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Path to the ledger database
    #[clap(long, default_value = "khata.sqlite3", env = "KHATA_DB")]
    pub db: String,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the database
    #[clap(name = "init")]
    Init,
    /// Manage persons
    #[clap(name = "person", subcommand)]
    Person(Persons),
    /// Manage transactions
    #[clap(name = "txn", subcommand)]
    Txn(Transactions),
    /// Backup and restore the ledger
    #[clap(name = "backup", subcommand)]
    Backup(Backups),
    /// Delete all persons and transactions
    #[clap(name = "clear")]
    Clear(ClearData),
}
