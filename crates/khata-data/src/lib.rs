// Operations
mod operations;
pub use operations::*;

// Models
mod persons;
pub use persons::*;

mod transactions;
pub use transactions::*;

mod snapshot;
pub use snapshot::*;
