pub mod application;
pub mod cli;
pub mod domain;
pub mod storage;

pub use application::ExpenseService;
pub use domain::*;
pub use storage::LedgerStore;
