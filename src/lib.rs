//! Contact Book - a contact list with validated editing, search and CSV persistence.
//!
//! The crate holds the logic behind a contact-book form: validating names,
//! emails, birth dates and phone numbers, applying table-cell edits, filtering
//! the table by a search query, and reading or writing the contact file. A UI
//! shell (the bundled command-line one, or any other) only renders the derived
//! [`TableView`] and forwards user actions to [`ContactStore`].
//!
//! # Architecture
//!
//! - **domain**: Field rules and the phone list parser
//! - **models**: The contact record and its columns
//! - **codec**: The unquoted seven-field CSV format
//! - **edit**: Per-cell edit validation and commit/reject outcomes
//! - **search**: Derived table view with highlighting and row filtering
//! - **repositories**: Where the encoded contact text is stored
//! - **services**: The contact store tying the above together
//! - **report**: Import summaries
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: Command-line shell over the store

pub mod cli;
pub mod codec;
pub mod config;
pub mod domain;
pub mod edit;
pub mod error;
pub mod models;
pub mod report;
pub mod repositories;
pub mod search;
pub mod services;

pub use codec::{decode, decode_bytes, encode, DecodeOutcome};
pub use config::Config;
pub use edit::{EditMode, EditOutcome};
pub use error::{ConfigError, ContactError, ContactResult};
pub use models::{ContactField, ContactRecord};
pub use report::ImportReport;
pub use repositories::{ContactRepository, CsvFileRepository};
pub use search::{TableCell, TableRow, TableView};
pub use services::{ContactStore, NewContact};
