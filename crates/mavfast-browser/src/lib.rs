// Headless browser sessions against the supplier site

mod chrome_finder;
mod error;
mod launch;
mod profile;
mod session;

pub use chrome_finder::ChromeFinder;
pub use error::{Error, Result};
pub use launch::LaunchOptions;
pub use profile::ProfileManager;
pub use session::{ChromeSession, ChromeSessionFactory, SessionFactory, SupplierSession};
