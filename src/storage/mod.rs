mod error;
mod ledger;

pub use error::*;
pub use ledger::*;
