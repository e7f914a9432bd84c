mod persons;
pub use persons::*;

mod transactions;
pub use transactions::*;

mod backup;
pub use backup::*;
