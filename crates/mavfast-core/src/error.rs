use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read quote file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse quote: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No parts provided for processing")]
    EmptyQuote,

    #[error("Invalid part: {0}")]
    InvalidPart(String),
}

pub type Result<T> = std::result::Result<T, Error>;
