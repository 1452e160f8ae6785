mod amount;
mod error;
mod expense;
mod payment;

pub use amount::*;
pub use error::*;
pub use expense::*;
pub use payment::*;
