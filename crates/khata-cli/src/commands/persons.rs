use anyhow::Result;
use clap::{Args, Subcommand};
use inquire::Confirm;

use khata_data::{Delete, Person, PersonFilter, Query, Retrieve, Transaction, Upsert};
use khata_db::Database;
use khata_ledger::{generate_id, validate_person, PersonSummary};

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Persons {
    /// Show a person with their balance and transactions
    #[clap(name = "show")]
    Show(ShowPerson),
    /// List persons with their balances
    #[clap(name = "list")]
    List(ListPersons),
    /// Add a person
    #[clap(name = "add")]
    Add(AddPerson),
    /// Update a person
    #[clap(name = "set")]
    Update(UpdatePerson),
    /// Delete a person and all their transactions
    #[clap(name = "delete")]
    Delete(DeletePerson),
}

impl Persons {
    pub async fn run(self, db: &Database) -> Result<()> {
        match self {
            Persons::Show(cmd) => cmd.run(db).await,
            Persons::List(cmd) => cmd.run(db).await,
            Persons::Add(cmd) => cmd.run(db).await,
            Persons::Update(cmd) => cmd.run(db).await,
            Persons::Delete(cmd) => cmd.run(db).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct ShowPerson {
    #[clap(short, long)]
    pub id: String,
}

impl ShowPerson {
    pub async fn run(self, db: &Database) -> Result<()> {
        let person: Person = db.retrieve(self.id).await?;
        let transactions = person.get_transactions(db).await?;
        let summary = PersonSummary::of(&transactions);

        println!();
        person.print_formatted();
        println!();
        summary.print_formatted();
        println!();

        println!(
            "{:<24}\t{:<28}\t{:<8}\t{:>10}\t{}",
            "ID", "Date", "Type", "Amount", "Description"
        );
        println!("{:-<110}", "-");
        for tx in transactions {
            println!(
                "{:<24}\t{:<28}\t{:<8}\t{:>10.2}\t{}",
                tx.id, tx.date, tx.kind, tx.amount, tx.description
            );
        }

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListPersons {
    #[clap(short, long)]
    pub name: Option<String>,
}

impl ListPersons {
    pub async fn run(self, db: &Database) -> Result<()> {
        let filter = PersonFilter {
            name: self.name,
            ..Default::default()
        };
        let persons: Vec<Person> = db.query(&filter).await?;

        // One pass over all transactions instead of a query per
        // person.
        let transactions: Vec<Transaction> = db.query(&Default::default()).await?;
        let listing: Vec<(Person, PersonSummary)> = persons
            .into_iter()
            .map(|person| {
                let own: Vec<Transaction> = transactions
                    .iter()
                    .filter(|tx| tx.person_id == person.id)
                    .cloned()
                    .collect();
                let summary = PersonSummary::of(&own);
                (person, summary)
            })
            .collect();

        println!("{} persons.", listing.len());
        listing.print_formatted();

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct AddPerson {
    #[clap(short, long)]
    pub name: String,
    #[clap(short, long)]
    pub phone: Option<String>,
    #[clap(short, long)]
    pub email: Option<String>,
    #[clap(long)]
    pub image_uri: Option<String>,
}

impl AddPerson {
    pub async fn run(self, db: &Database) -> Result<()> {
        let person = Person {
            phone: self.phone.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            image_uri: self.image_uri,
            ..Person::new(generate_id(), self.name)
        };
        validate_person(&person)?;

        let person = db.upsert(person).await?;
        println!("Person added with id {}.", person.id);

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct UpdatePerson {
    #[clap(short, long)]
    pub id: String,
    #[clap(short, long)]
    pub name: Option<String>,
    #[clap(short, long)]
    pub phone: Option<String>,
    #[clap(short, long)]
    pub email: Option<String>,
    #[clap(long)]
    pub image_uri: Option<String>,
}

impl UpdatePerson {
    pub async fn run(self, db: &Database) -> Result<()> {
        let person: Person = db.retrieve(self.id).await?;
        let mut update = person.clone();

        if let Some(name) = self.name {
            update.name = name;
        }
        if let Some(phone) = self.phone {
            update.phone = phone;
        }
        if let Some(email) = self.email {
            update.email = email;
        }
        if let Some(image_uri) = self.image_uri {
            update.image_uri = Some(image_uri);
        }
        validate_person(&update)?;

        println!();
        (person, update.clone()).print_formatted();
        println!();
        let confirm = Confirm::new("Update person?").with_default(true);
        if !confirm.prompt()? {
            return Ok(());
        }

        db.upsert(update).await?;

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct DeletePerson {
    #[clap(short, long)]
    pub id: String,
}

impl DeletePerson {
    pub async fn run(self, db: &Database) -> Result<()> {
        let person: Person = db.retrieve(self.id).await?;
        let transactions = person.get_transactions(db).await?;

        println!();
        person.print_formatted();
        println!();
        let message = format!(
            "Delete person and their {} transactions?",
            transactions.len()
        );
        let confirm = Confirm::new(&message).with_default(false);
        if !confirm.prompt()? {
            return Ok(());
        }

        db.delete(person).await?;
        println!("Deleted.");

        Ok(())
    }
}
