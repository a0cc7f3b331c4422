use chromiumoxide::error::CdpError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while acquiring or driving a supplier browser session
#[derive(Error, Debug)]
pub enum Error {
    #[error("Chrome not found: {0}")]
    ChromeNotFound(String),

    #[error("Chrome binary not executable: {}", .0.display())]
    NotExecutable(PathBuf),

    #[error("Failed to create Chrome profile: {0}")]
    Profile(#[source] std::io::Error),

    #[error("Failed to launch Chrome: {0}")]
    Launch(String),

    #[error("Failed to open supplier page {url}: {reason}")]
    Navigation { url: String, reason: String },

    #[error("Chrome DevTools error: {0}")]
    Protocol(String),
}

impl From<CdpError> for Error {
    fn from(err: CdpError) -> Self {
        Error::Protocol(err.to_string())
    }
}

impl Error {
    /// True when no browser could be started for the session
    pub fn is_launch_failure(&self) -> bool {
        matches!(
            self,
            Error::ChromeNotFound(_) | Error::NotExecutable(_) | Error::Profile(_) | Error::Launch(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
