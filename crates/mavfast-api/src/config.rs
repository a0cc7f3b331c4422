use crate::{Error, Result};
use serde::Serialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_SUPPLIER_URL: &str = "https://brightonbest.com";
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration, read from the environment.
///
/// Empty variables are treated as unset. Nothing here affects pricing.
#[derive(Debug, Clone)]
pub struct Config {
    pub company_id: Option<String>,
    pub user_id: Option<String>,
    pub password: Option<String>,
    /// Service-account key JSON for Google Sheets
    pub sheets_credentials: Option<String>,
    pub input_sheet_id: Option<String>,
    pub output_sheet_id: Option<String>,
    pub chrome_bin: Option<PathBuf>,
    pub supplier_url: Url,
    pub host: IpAddr,
    pub port: u16,
    pub debug: bool,
    pub log_file: Option<PathBuf>,
}

/// What `mavfast config` and the test endpoint are allowed to show
#[derive(Debug, Serialize)]
pub struct RedactedConfig {
    pub company_id: Option<String>,
    pub user_id: Option<String>,
    pub password_set: bool,
    pub sheets_credentials_set: bool,
    pub input_sheet_id: Option<String>,
    pub output_sheet_id: Option<String>,
    pub chrome_bin: Option<String>,
    pub supplier_url: String,
    pub bind_addr: String,
    pub debug: bool,
    pub log_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let supplier_url = var("SUPPLIER_URL").unwrap_or_else(|| DEFAULT_SUPPLIER_URL.to_string());
        let supplier_url = Url::parse(&supplier_url)
            .map_err(|e| Error::Config(format!("Invalid SUPPLIER_URL '{}': {}", supplier_url, e)))?;

        let host = match var("HOST") {
            Some(host) => host
                .parse::<IpAddr>()
                .map_err(|e| Error::Config(format!("Invalid HOST '{}': {}", host, e)))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match var("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| Error::Config(format!("Invalid PORT '{}': {}", port, e)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            company_id: var("COMPANY_ID"),
            user_id: var("USER_ID"),
            password: var("PASSWORD"),
            sheets_credentials: var("GOOGLE_SHEETS_CREDENTIALS"),
            input_sheet_id: var("INPUT_SHEET_ID"),
            output_sheet_id: var("OUTPUT_SHEET_ID"),
            chrome_bin: var("CHROME_BIN").map(PathBuf::from),
            supplier_url,
            host,
            port,
            debug: var("DEBUG").is_some_and(|v| v.eq_ignore_ascii_case("true")),
            log_file: var("LOG_FILE").map(PathBuf::from),
        })
    }

    /// Supplier login page, `login` appended under `supplier_url`'s path
    pub fn login_url(&self) -> Result<Url> {
        let mut base = self.supplier_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        base.join("login")
            .map_err(|e| Error::Config(format!("Cannot build login URL: {}", e)))
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn redacted(&self) -> RedactedConfig {
        RedactedConfig {
            company_id: self.company_id.clone(),
            user_id: self.user_id.clone(),
            password_set: self.password.is_some(),
            sheets_credentials_set: self.sheets_credentials.is_some(),
            input_sheet_id: self.input_sheet_id.clone(),
            output_sheet_id: self.output_sheet_id.clone(),
            chrome_bin: self.chrome_bin.as_ref().map(|p| p.display().to_string()),
            supplier_url: self.supplier_url.to_string(),
            bind_addr: self.bind_addr().to_string(),
            debug: self.debug,
            log_file: self.log_file.as_ref().map(|p| p.display().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:5000");
        assert!(!config.debug);
        assert!(config.company_id.is_none());
        assert!(config.chrome_bin.is_none());
        assert_eq!(
            config.login_url().unwrap().as_str(),
            "https://brightonbest.com/login"
        );
    }

    #[test]
    fn test_login_url_keeps_supplier_path() {
        let config = config_from(&[("SUPPLIER_URL", "https://supplier.example/portal")]).unwrap();
        assert_eq!(
            config.login_url().unwrap().as_str(),
            "https://supplier.example/portal/login"
        );

        let config = config_from(&[("SUPPLIER_URL", "https://supplier.example/portal/")]).unwrap();
        assert_eq!(
            config.login_url().unwrap().as_str(),
            "https://supplier.example/portal/login"
        );
    }

    #[test]
    fn test_reads_variables() {
        let config = config_from(&[
            ("PORT", "8081"),
            ("HOST", "127.0.0.1"),
            ("DEBUG", "True"),
            ("COMPANY_ID", "n1"),
            ("CHROME_BIN", "/opt/chromium"),
            ("OUTPUT_SHEET_ID", "sheet-123"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8081");
        assert!(config.debug);
        assert_eq!(config.company_id.as_deref(), Some("n1"));
        assert_eq!(config.chrome_bin, Some(PathBuf::from("/opt/chromium")));
        assert_eq!(config.output_sheet_id.as_deref(), Some("sheet-123"));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = config_from(&[("GOOGLE_SHEETS_CREDENTIALS", ""), ("PORT", " ")]).unwrap();

        assert!(config.sheets_credentials.is_none());
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_debug_requires_true() {
        let config = config_from(&[("DEBUG", "1")]).unwrap();
        assert!(!config.debug);
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("Invalid PORT"));
    }

    #[test]
    fn test_invalid_supplier_url() {
        let err = config_from(&[("SUPPLIER_URL", "not a url")]).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_redacted_hides_password() {
        let config = config_from(&[("PASSWORD", "hunter2"), ("USER_ID", "ops")]).unwrap();
        let json = serde_json::to_string(&config.redacted()).unwrap();

        assert!(!json.contains("hunter2"));
        assert!(json.contains("\"password_set\":true"));
        assert!(json.contains("\"user_id\":\"ops\""));
    }
}
