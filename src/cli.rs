//! Command-line interface definitions and dispatch

use crate::config::Config;
use crate::domain::parse_birth_date;
use crate::edit::EditMode;
use crate::error::ContactError;
use crate::models::ContactField;
use crate::repositories::{ContactRepository, CsvFileRepository};
use crate::search::TableView;
use crate::report::ImportReport;
use crate::services::{ContactStore, NewContact};
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Contact file (overrides CONTACT_BOOK_FILE)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Save changes even if lines of the contact file could not be read back
    #[arg(long, global = true)]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the contact table
    List {
        /// Only show rows containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Print the table view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a contact
    Add {
        #[arg(long)]
        first: String,
        #[arg(long)]
        last: String,
        #[arg(long)]
        middle: String,
        #[arg(long, default_value = "")]
        address: String,
        /// Birth date as dd.MM.yyyy
        #[arg(long)]
        birth: String,
        #[arg(long)]
        email: String,
        /// Comma-separated phone numbers
        #[arg(long)]
        phones: String,
    },
    /// Change one cell of the table
    Edit {
        /// Row number as shown by `list`
        row: usize,
        /// Column name or index (0-6)
        column: ContactField,
        value: String,
    },
    /// Delete a contact
    Delete {
        /// Row number as shown by `list`
        row: usize,
    },
    /// Sort the contacts by a column
    Sort {
        /// Column name or index (0-6)
        column: ContactField,
    },
    /// Replace the contacts with the ones in another file
    Import { source: PathBuf },
    /// Write contacts to another file
    Export {
        target: PathBuf,
        /// Only export rows containing this text
        #[arg(short, long)]
        search: Option<String>,
    },
}

/// Convert a 1-based row number from the command line into a store index.
///
/// Errors carry the row number as the user typed it.
fn store_row(row: usize, len: usize) -> Result<usize, ContactError> {
    if row == 0 || row > len {
        return Err(ContactError::NoSuchRow { row });
    }
    Ok(row - 1)
}

fn load_store(repo: &CsvFileRepository, config: &Config) -> Result<(ContactStore, ImportReport)> {
    let mut store = ContactStore::new().with_report_limit(config.import_error_limit);
    if !repo.exists() {
        return Ok((store, ImportReport::new()));
    }

    let report = store.import_from(repo)?;
    if !report.is_clean() {
        warn!(
            problems = report.messages.len(),
            damaged_lines = report.damaged_lines,
            "Contact file has entries that need correction"
        );
        eprintln!("{}", report);
    }
    Ok((store, report))
}

/// Refuse to overwrite a file whose damaged lines the save would drop or alter.
fn ensure_rewritable(repo: &CsvFileRepository, report: &ImportReport, force: bool) -> Result<()> {
    if report.loses_lines() && !force {
        bail!(
            "{} has {} line(s) that could not be read back; saving would drop or alter them. \
             Fix the file or rerun with --force",
            repo.location(),
            report.damaged_lines
        );
    }
    Ok(())
}

fn print_table(view: &TableView) {
    println!("#\t{}", TableView::headers().join("\t"));
    for row in view.visible_rows() {
        let cells: Vec<&str> = row.cells.iter().map(|cell| cell.text.as_str()).collect();
        println!("{}\t{}", row.index + 1, cells.join("\t"));
    }
}

/// Execute one command against the configured contact file.
pub fn run(cli: Cli, config: &Config) -> Result<()> {
    let path = cli.file.unwrap_or_else(|| config.contact_file.clone());
    let repo = CsvFileRepository::new(path);
    let (mut store, loaded) = load_store(&repo, config)?;

    match cli.command {
        Commands::List { search, json } => {
            store.set_search(search.unwrap_or_default());
            let view = store.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_table(&view);
            }
        }
        Commands::Add {
            first,
            last,
            middle,
            address,
            birth,
            email,
            phones,
        } => {
            let birth_date =
                parse_birth_date(&birth).ok_or_else(|| ContactError::InvalidDate(birth.clone()))?;
            let row = store.add(NewContact {
                first_name: first,
                last_name: last,
                middle_name: middle,
                address,
                birth_date,
                email,
                phones,
            })?;
            ensure_rewritable(&repo, &loaded, cli.force)?;
            store.export_all(&repo)?;
            println!("Contact added at row {}.", row + 1);
        }
        Commands::Edit { row, column, value } => {
            let index = store_row(row, store.len())?;
            let outcome = store.edit_cell(index, column, &value, EditMode::Interactive)?;
            ensure_rewritable(&repo, &loaded, cli.force)?;
            store.export_all(&repo)?;
            println!("{}: {}", column.header(), outcome.display_text());
        }
        Commands::Delete { row } => {
            let index = store_row(row, store.len())?;
            store
                .remove(index)
                .ok_or(ContactError::NoSuchRow { row })?;
            ensure_rewritable(&repo, &loaded, cli.force)?;
            store.export_all(&repo)?;
            println!("Contact at row {} deleted.", row);
        }
        Commands::Sort { column } => {
            store.sort_by(column);
            ensure_rewritable(&repo, &loaded, cli.force)?;
            store.export_all(&repo)?;
            print_table(&store.view());
        }
        Commands::Import { source } => {
            let report = store.import_from(&CsvFileRepository::new(source))?;
            store.export_all(&repo)?;
            println!("{}", report);
        }
        Commands::Export { target, search } => {
            store.set_search(search.unwrap_or_default());
            let written = store.export_to(&CsvFileRepository::new(target))?;
            println!("Exported {} contacts.", written);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const VALID_LINE: &str =
        "Ivan,Petrov,Sergeevich,Lenina 1,01.02.1980,ivan@example.com,+74951234567\n";

    fn config_for(path: PathBuf) -> Config {
        Config {
            contact_file: path,
            ..Config::default()
        }
    }

    #[test]
    fn test_parse_edit_command() {
        let cli = Cli::try_parse_from(["contact-book", "edit", "2", "email", "a@b.cc"]).unwrap();
        match cli.command {
            Commands::Edit { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, ContactField::Email);
                assert_eq!(value, "a@b.cc");
            }
            other => panic!("Expected edit, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_column() {
        assert!(Cli::try_parse_from(["contact-book", "sort", "nickname"]).is_err());
    }

    #[test]
    fn test_store_row_is_one_based() {
        assert_eq!(store_row(1, 1).unwrap(), 0);
        assert!(matches!(store_row(0, 1), Err(ContactError::NoSuchRow { row: 0 })));
        assert!(matches!(store_row(2, 1), Err(ContactError::NoSuchRow { row: 2 })));
    }

    #[test]
    fn test_add_then_edit_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.csv");
        let config = config_for(path.clone());

        let add = Cli::try_parse_from([
            "contact-book",
            "add",
            "--first",
            "Anna",
            "--last",
            "Ivanova",
            "--middle",
            "Petrovna",
            "--birth",
            "05.03.1990",
            "--email",
            "anna@example.com",
            "--phones",
            "+7 (495) 123-45-67",
        ])
        .unwrap();
        run(add, &config).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Anna,Ivanova,Petrovna,,05.03.1990,anna@example.com,+74951234567\n"
        );

        let bad_edit = Cli::try_parse_from(["contact-book", "edit", "1", "first", "anna"]).unwrap();
        assert!(run(bad_edit, &config).is_err());

        let edit = Cli::try_parse_from(["contact-book", "edit", "1", "address", "Tverskaya 7"]).unwrap();
        run(edit, &config).unwrap();
        assert!(fs::read_to_string(&path)
            .unwrap()
            .starts_with("Anna,Ivanova,Petrovna,Tverskaya 7,"));
    }

    #[test]
    fn test_delete_missing_row_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path().join("book.csv"));
        let delete = Cli::try_parse_from(["contact-book", "delete", "3"]).unwrap();
        assert!(run(delete, &config).is_err());
    }

    #[test]
    fn test_edit_missing_row_reports_typed_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.csv");
        fs::write(&path, VALID_LINE).unwrap();

        let edit = Cli::try_parse_from(["contact-book", "edit", "5", "address", "x"]).unwrap();
        let err = run(edit, &config_for(path.clone())).unwrap_err();
        assert_eq!(err.to_string(), "No contact at row 5");
        assert_eq!(fs::read_to_string(&path).unwrap(), VALID_LINE);
    }

    #[test]
    fn test_mutation_refuses_to_drop_unreadable_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.csv");
        let original = format!("{}Olga,Smirnova,Ivanovna,Pushkina 10\n", VALID_LINE);
        fs::write(&path, &original).unwrap();
        let config = config_for(path.clone());

        let edit = Cli::try_parse_from(["contact-book", "edit", "1", "address", "Arbat 3"]).unwrap();
        let err = run(edit, &config).unwrap_err();
        assert!(err.to_string().contains("--force"), "{}", err);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);

        let forced =
            Cli::try_parse_from(["contact-book", "--force", "edit", "1", "address", "Arbat 3"]).unwrap();
        run(forced, &config).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Ivan,Petrov,Sergeevich,Arbat 3,01.02.1980,ivan@example.com,+74951234567\n"
        );
    }

    #[test]
    fn test_listing_a_damaged_file_leaves_it_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.csv");
        let original = format!("{}Short,Line\n", VALID_LINE);
        fs::write(&path, &original).unwrap();

        let list = Cli::try_parse_from(["contact-book", "list"]).unwrap();
        run(list, &config_for(path.clone())).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }
}
