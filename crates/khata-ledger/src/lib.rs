mod balance;
pub use balance::*;

mod summary;
pub use summary::*;

mod ids;
pub use ids::*;

mod validate;
pub use validate::*;
