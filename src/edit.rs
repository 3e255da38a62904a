//! Table-cell edit handling.
//!
//! An edit moves through three steps: the new text is parsed and validated
//! against the rule for its column ([`validate_edit`]), then either committed to
//! the record or rejected, leaving the record untouched ([`apply_edit`]). What a
//! rejection means to the user depends on [`EditMode`]: interactively it is an
//! error to surface, during a bulk import it becomes a line in the report.

use crate::domain::{is_valid_email, is_valid_name, parse_phone_list, validate_birth_date};
use crate::error::{ContactError, ContactResult};
use crate::models::{ContactField, ContactRecord};
use crate::report::ImportReport;
use chrono::NaiveDate;

/// How rejected edits are reported.
#[derive(Debug)]
pub enum EditMode<'a> {
    /// Every rejection is returned to the caller as an error.
    Interactive,

    /// Rejections are appended to the report and the edit returns normally.
    BulkImport(&'a mut ImportReport),
}

/// A validated value, tagged with the column it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    FirstName(String),
    LastName(String),
    MiddleName(String),
    Address(String),
    BirthDate(NaiveDate),
    Email(String),
    PhoneNumbers(Vec<String>),
}

impl FieldValue {
    /// Column this value is stored in.
    pub fn field(&self) -> ContactField {
        match self {
            Self::FirstName(_) => ContactField::FirstName,
            Self::LastName(_) => ContactField::LastName,
            Self::MiddleName(_) => ContactField::MiddleName,
            Self::Address(_) => ContactField::Address,
            Self::BirthDate(_) => ContactField::BirthDate,
            Self::Email(_) => ContactField::Email,
            Self::PhoneNumbers(_) => ContactField::PhoneNumbers,
        }
    }

    /// Store the value in its column of `record`.
    pub fn commit(self, record: &mut ContactRecord) {
        match self {
            Self::FirstName(text) => record.first_name = text,
            Self::LastName(text) => record.last_name = text,
            Self::MiddleName(text) => record.middle_name = text,
            Self::Address(text) => record.address = text,
            Self::BirthDate(date) => record.birth_date = Some(date),
            Self::Email(text) => record.email = text,
            Self::PhoneNumbers(numbers) => record.phone_numbers = numbers,
        }
    }
}

/// Terminal state of one edit.
#[derive(Debug)]
pub enum EditOutcome {
    /// The text passed its rule and the record now holds it.
    Committed {
        field: ContactField,
        /// Display text after the commit
        display: String,
    },

    /// The text failed its rule; the record is unchanged.
    Rejected {
        field: ContactField,
        /// Last committed display text, to put back into the cell
        reverted: String,
        error: ContactError,
    },
}

impl EditOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }

    /// Text the cell should show once the edit settles.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Committed { display, .. } => display,
            Self::Rejected { reverted, .. } => reverted,
        }
    }
}

/// Parse and validate `text` for `field`.
///
/// Names, address and email are trimmed. The birth date must parse as
/// `dd.MM.yyyy` and not be later than `today`. The phone field must yield at
/// least one valid number.
pub fn validate_edit(field: ContactField, text: &str, today: NaiveDate) -> ContactResult<FieldValue> {
    let trimmed = text.trim();
    let name = |wrap: fn(String) -> FieldValue| {
        if is_valid_name(trimmed) {
            Ok(wrap(trimmed.to_string()))
        } else {
            Err(ContactError::InvalidName(trimmed.to_string()))
        }
    };
    match field {
        ContactField::FirstName => name(FieldValue::FirstName),
        ContactField::LastName => name(FieldValue::LastName),
        ContactField::MiddleName => name(FieldValue::MiddleName),
        ContactField::Address => Ok(FieldValue::Address(trimmed.to_string())),
        ContactField::BirthDate => validate_birth_date(trimmed, today).map(FieldValue::BirthDate),
        ContactField::Email => {
            if is_valid_email(trimmed) {
                Ok(FieldValue::Email(trimmed.to_string()))
            } else {
                Err(ContactError::InvalidEmail(trimmed.to_string()))
            }
        }
        ContactField::PhoneNumbers => {
            let numbers = parse_phone_list(trimmed);
            if numbers.is_empty() {
                Err(ContactError::InvalidPhoneSet(trimmed.to_string()))
            } else {
                Ok(FieldValue::PhoneNumbers(numbers))
            }
        }
    }
}

/// Validate `text` for `field` and commit it to `record` if it passes.
pub fn apply_edit(
    record: &mut ContactRecord,
    field: ContactField,
    text: &str,
    today: NaiveDate,
) -> EditOutcome {
    match validate_edit(field, text, today) {
        Ok(value) => {
            value.commit(record);
            EditOutcome::Committed {
                field,
                display: record.display_text(field),
            }
        }
        Err(error) => EditOutcome::Rejected {
            field,
            reverted: record.display_text(field),
            error,
        },
    }
}

/// Human-readable message for a rejected field, as it appears in reports.
pub fn rejection_message(row: usize, field: ContactField, error: &ContactError) -> String {
    format!("Row {}, {}: {}", row + 1, field.header(), error)
}
