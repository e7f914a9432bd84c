use khata_data::Person;
use khata_ledger::PersonSummary;

macro_rules! next_attr {
    ($old:ident, $new:ident) => {
        if $old != $new {
            format!(" -> {}", $new)
        } else {
            "".to_string()
        }
    };
    ($old:ident, $new:ident, $attr:ident) => {
        if $old.$attr != $new.$attr {
            format!(" -> {}", $new.$attr)
        } else {
            "".to_string()
        }
    };
}

pub trait PrintFormatted {
    fn print_formatted(&self);
}

impl PrintFormatted for Person {
    fn print_formatted(&self) {
        let image_uri = match &self.image_uri {
            Some(uri) => uri.as_str(),
            None => "None",
        };

        println!("Id:\t\t{}", self.id);
        println!("Name:\t\t{}", self.name);
        println!("Phone:\t\t{}", self.phone);
        println!("Email:\t\t{}", self.email);
        println!("Photo:\t\t{}", image_uri);
        println!("Added:\t\t{}", self.created_at);
    }
}

impl PrintFormatted for (Person, Person) {
    fn print_formatted(&self) {
        let (old, new) = self;
        let image_uri_old = match &old.image_uri {
            Some(uri) => uri.clone(),
            None => "None".to_string(),
        };
        let image_uri_new = match &new.image_uri {
            Some(uri) => uri.clone(),
            None => "None".to_string(),
        };

        let next_name = next_attr!(old, new, name);
        println!("Name:\t\t{}{}", old.name, next_name);
        let next_phone = next_attr!(old, new, phone);
        println!("Phone:\t\t{}{}", old.phone, next_phone);
        let next_email = next_attr!(old, new, email);
        println!("Email:\t\t{}{}", old.email, next_email);
        let next_image_uri = next_attr!(image_uri_old, image_uri_new);
        println!("Photo:\t\t{}{}", image_uri_old, next_image_uri);
    }
}

impl PrintFormatted for PersonSummary {
    fn print_formatted(&self) {
        let last = match self.last_transaction_date {
            Some(date) => date.to_string(),
            None => "None".to_string(),
        };

        println!("Balance:\t{:.2}", self.balance);
        println!("Given:\t\t{:.2}", self.given_total);
        println!("Taken:\t\t{:.2}", self.taken_total);
        println!("Entries:\t{}", self.transaction_count);
        println!("Last Entry:\t{}", last);
    }
}

impl PrintFormatted for Vec<(Person, PersonSummary)> {
    fn print_formatted(&self) {
        println!(
            "{:<24}\t{:<24}\t{:<16}\t{:>10}\t{:>10}\t{:>10}\t{:>7}",
            "ID", "Name", "Phone", "Balance", "Given", "Taken", "Entries"
        );
        println!("{:-<130}", "-");

        for (person, summary) in self {
            println!(
                "{:<24}\t{:<24}\t{:<16}\t{:>10.2}\t{:>10.2}\t{:>10.2}\t{:>7}",
                person.id,
                person.name,
                person.phone,
                summary.balance,
                summary.given_total,
                summary.taken_total,
                summary.transaction_count,
            );
        }
    }
}
