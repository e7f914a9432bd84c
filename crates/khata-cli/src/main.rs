use anyhow::Result;
use tracing_subscriber::EnvFilter;

use khata_cli::cli::{Cli, Command};
use khata_db::Database;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::init();
    let db = Database::new(&cli.db);

    match cli.command {
        Command::Init => {
            db.get().await?;
            println!("Database ready: {}", db.filename());
            Ok(())
        }
        Command::Person(cmd) => cmd.run(&db).await,
        Command::Txn(cmd) => cmd.run(&db).await,
        Command::Backup(cmd) => cmd.run(&db).await,
        Command::Clear(cmd) => cmd.run(&db).await,
    }
}
