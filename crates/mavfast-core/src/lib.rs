pub mod error;
pub mod pricing;
pub mod quote;

pub use error::{Error, Result};
