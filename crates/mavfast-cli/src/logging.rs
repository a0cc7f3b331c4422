use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const CRATES: &[&str] = &[
    "mavfast",
    "mavfast_cli",
    "mavfast_api",
    "mavfast_core",
    "mavfast_browser",
];

/// Default filter directive; `RUST_LOG` takes precedence when set
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    let mut directives: Vec<String> = CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, level))
        .collect();

    if verbose {
        directives.push("tower_http=debug".to_string());
    }

    directives.join(",")
}

/// Log to stderr, and additionally to `log_file` (appended, no colours) when given
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_levels() {
        let quiet = default_directive(false);
        assert!(quiet.contains("mavfast_api=info"));
        assert!(!quiet.contains("tower_http"));

        let verbose = default_directive(true);
        assert!(verbose.contains("mavfast_core=debug"));
        assert!(verbose.contains("tower_http=debug"));
    }
}
