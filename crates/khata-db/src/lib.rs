pub mod connection;
pub use connection::{open, open_test, test_filename, Connection, TestHandle};

pub mod database;
pub use database::Database;

pub mod results;
pub mod schema;

pub mod persons;
pub mod snapshot;
pub mod transactions;
