use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use inquire::Confirm;

use khata_data::{
    Delete, Person, PersonFilter, Query, Retrieve, Transaction, TransactionFilter, Upsert,
};
use khata_db::Database;
use khata_ledger::{generate_id, parse_amount, parse_kind, Summarize};

#[derive(Subcommand, Debug)]
pub enum Transactions {
    /// Record a transaction
    #[clap(name = "add")]
    Add(AddTransaction),
    /// List transactions
    #[clap(name = "list")]
    List(ListTransactions),
    /// Delete a transaction
    #[clap(name = "delete")]
    Delete(DeleteTransaction),
}

impl Transactions {
    pub async fn run(self, db: &Database) -> Result<()> {
        match self {
            Transactions::Add(cmd) => cmd.run(db).await,
            Transactions::List(cmd) => cmd.run(db).await,
            Transactions::Delete(cmd) => cmd.run(db).await,
        }
    }
}

/// Find a person by id or by name, whichever was given.
async fn resolve_person(
    db: &Database,
    person_id: Option<String>,
    person_name: Option<String>,
) -> Result<Person> {
    if let Some(id) = person_id {
        let person = db.retrieve(id).await?;
        return Ok(person);
    }
    if let Some(name) = person_name {
        let persons: Vec<Person> = db
            .query(&PersonFilter {
                name: Some(name),
                ..Default::default()
            })
            .await?;
        let person = persons.into_iter().next().ok_or(anyhow!("person not found"))?;
        return Ok(person);
    }
    Err(anyhow!("either --person-id or --person-name is required"))
}

#[derive(Args, Debug)]
pub struct AddTransaction {
    #[clap(long)]
    pub person_id: Option<String>,
    #[clap(long)]
    pub person_name: Option<String>,
    /// Amount as a positive number; direction comes from the type
    #[clap(short, long)]
    pub amount: String,
    /// credit (money given) or debit (money taken)
    #[clap(short = 't', long = "type")]
    pub kind: String,
    #[clap(short, long)]
    pub description: Option<String>,
    /// Transaction date, RFC 3339; defaults to now
    #[clap(long)]
    pub date: Option<DateTime<Utc>>,
}

impl AddTransaction {
    pub async fn run(self, db: &Database) -> Result<()> {
        let person = resolve_person(db, self.person_id, self.person_name).await?;

        let amount = parse_amount(&self.amount)?;
        let kind = parse_kind(&self.kind)?;

        let transaction = Transaction {
            description: self.description.unwrap_or_default(),
            ..Transaction::new(generate_id(), person.id.clone(), amount, kind, self.date)
        };
        let transaction = db.upsert(transaction).await?;
        println!("Transaction added with id {}.", transaction.id);

        let summary = person.summary(db).await?;
        println!("Balance for {}: {:.2}", person.name, summary.balance);

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListTransactions {
    #[clap(long)]
    pub person_id: Option<String>,
    #[clap(long)]
    pub person_name: Option<String>,
    /// Only transactions at or after this date, RFC 3339
    #[clap(short, long)]
    pub after_date: Option<DateTime<Utc>>,
    /// Only transactions at or before this date, RFC 3339
    #[clap(short, long)]
    pub before_date: Option<DateTime<Utc>>,
}

impl ListTransactions {
    pub async fn run(self, db: &Database) -> Result<()> {
        // Build filter
        let mut filter = TransactionFilter {
            date_after: self.after_date,
            date_before: self.before_date,
            ..Default::default()
        };
        if self.person_id.is_some() || self.person_name.is_some() {
            let person = resolve_person(db, self.person_id, self.person_name).await?;
            filter.person_id = Some(person.id);
        }

        let transactions: Vec<Transaction> = db.query(&filter).await?;
        println!(
            "{:<24}\t{:<28}\t{:<24}\t{:<8}\t{:>10}\t{}",
            "ID", "Date", "Person", "Type", "Amount", "Description"
        );
        println!("{:-<130}", "-");
        for tx in transactions {
            let person: Person = db.retrieve(tx.person_id.clone()).await?;
            println!(
                "{:<24}\t{:<28}\t{:<24}\t{:<8}\t{:>10.2}\t{}",
                tx.id, tx.date, person.name, tx.kind, tx.amount, tx.description
            );
        }

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct DeleteTransaction {
    #[clap(short, long)]
    pub id: String,
}

impl DeleteTransaction {
    pub async fn run(self, db: &Database) -> Result<()> {
        let transaction: Transaction = db.retrieve(self.id).await?;

        println!(
            "{} {} of {:.2} on {} ({})",
            transaction.kind,
            transaction.id,
            transaction.amount,
            transaction.date,
            transaction.description
        );
        let confirm = Confirm::new("Delete transaction?").with_default(false);
        if !confirm.prompt()? {
            return Ok(());
        }

        db.delete(transaction).await?;
        println!("Deleted.");

        Ok(())
    }
}
