mod reader;
mod types;

pub use reader::QuoteReader;
pub use types::*;
