use anyhow::Result;
use clap::{Parser, Subcommand};
use mavfast_api::Config;
use mavfast_cli::{OutputFormat, commands, logging};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mavfast")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Remote Brighton Best quote automation for n8n",
    long_about = "MavFast exposes a small REST API that n8n calls to run Brighton Best \
                  quote automation in a headless browser and price the requested parts. \
                  Credentials, sheet ids and browser paths come from the environment."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST API server
    Serve {
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Enable debug logging (same as DEBUG=true)
        #[arg(long)]
        debug: bool,

        /// Also append logs to this file (overrides LOG_FILE)
        #[arg(long, value_name = "FILE")]
        log_file: Option<PathBuf>,
    },

    /// Price a quote JSON file with mock pricing, without a browser
    Quote {
        /// Path to the quote file (`{"quote_data": {...}}` or a bare quote)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Show the effective configuration with secrets redacted
    Config {
        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            debug,
            log_file,
        } => {
            let mut config = Config::from_env()?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if log_file.is_some() {
                config.log_file = log_file;
            }
            config.debug |= debug;

            logging::init(cli.verbose || config.debug, config.log_file.as_deref())?;
            commands::serve::execute(config)
        }
        Commands::Quote { file, format } => {
            logging::init(cli.verbose, None)?;
            commands::quote::execute(&file, format)
        }
        Commands::Config { format } => {
            logging::init(cli.verbose, None)?;
            let config = Config::from_env()?;
            commands::config::execute(&config, format)
        }
    }
}
