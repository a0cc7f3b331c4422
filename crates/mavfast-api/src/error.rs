use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Google Sheets error: {0}")]
    Sheets(String),

    #[error("Brighton Best workflow failed: {0}")]
    Workflow(String),

    #[error(transparent)]
    Quote(#[from] mavfast_core::Error),

    #[error(transparent)]
    Browser(#[from] mavfast_browser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
