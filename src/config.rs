//! Configuration management for the contact book shell.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default contact file name, relative to the working directory.
pub const DEFAULT_CONTACT_FILE: &str = "contacts.csv";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file the shell loads from and saves to (default: `contacts.csv`)
    pub contact_file: PathBuf,

    /// Maximum number of messages printed in an import report (default: 50)
    pub import_error_limit: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: CSV file path (default: `contacts.csv`)
    /// - `CONTACT_BOOK_IMPORT_ERROR_LIMIT`: Messages shown per import report (default: 50)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let contact_file = match env::var("CONTACT_BOOK_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_CONTACT_FILE),
        };

        let import_error_limit = Self::parse_env_usize("CONTACT_BOOK_IMPORT_ERROR_LIMIT", 50)?;
        if import_error_limit == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_IMPORT_ERROR_LIMIT".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            contact_file,
            import_error_limit,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contact_file: PathBuf::from(DEFAULT_CONTACT_FILE),
            import_error_limit: 50,
            log_level: "error".to_string(),
        }
    }
}
