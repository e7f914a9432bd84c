mod backup;
pub use backup::*;

mod restore;
pub use restore::*;

mod info;
pub use info::*;

mod share;
pub use share::*;
