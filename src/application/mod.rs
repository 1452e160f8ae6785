// Application layer - the primitives handed to an agent host.
// The service owns validation and message wording; the catalog maps
// primitive names and URIs onto it.

pub mod audit;
pub mod catalog;
pub mod error;
pub mod service;

pub use audit::*;
pub use catalog::*;
pub use error::*;
pub use service::*;
