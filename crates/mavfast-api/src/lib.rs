// REST surface for the supplier quote automation

pub mod automation;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod sheets;

pub use automation::{AutomationHandler, AutomationOutcome};
pub use config::Config;
pub use error::{Error, Result};
pub use routes::{AppState, app_router};
pub use server::ApiServer;
pub use sheets::SheetsClient;
