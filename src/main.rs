//! Contact Book - Main entry point
//!
//! Command-line shell over the contact store: list, search, add, edit, delete,
//! sort, import and export contacts kept in a CSV file.

use anyhow::Result;
use clap::Parser;
use contact_book::cli::{self, Cli};
use contact_book::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so table output on stdout stays clean
    let default_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using contact file: {}", config.contact_file.display());

    if let Err(e) = cli::run(cli, &config) {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
