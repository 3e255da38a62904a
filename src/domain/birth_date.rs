//! Birth date parsing, formatting and validation.

use crate::error::{ContactError, ContactResult};
use chrono::NaiveDate;

/// On-disk and on-screen date format (`dd.MM.yyyy`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a `dd.MM.yyyy` date. Returns `None` for anything unparseable.
pub fn parse_birth_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Format a birth date as `dd.MM.yyyy`; an invalid (absent) date renders empty.
pub fn format_birth_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parse `text` and check that the date is not later than `today`.
///
/// # Errors
///
/// Returns `ContactError::InvalidDate` if the text does not parse or names a future day.
pub fn validate_birth_date(text: &str, today: NaiveDate) -> ContactResult<NaiveDate> {
    match parse_birth_date(text) {
        Some(date) if date <= today => Ok(date),
        _ => Err(ContactError::InvalidDate(text.to_string())),
    }
}
