//! Contact model representing one person in the contact book.

use crate::domain::format_birth_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One contact's stored field values.
///
/// Records created through [`ContactStore::add`](crate::services::ContactStore::add)
/// have passed every field rule. Records decoded from a file are admitted as-is and
/// may hold invalid values until they are corrected through an edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactRecord {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Middle name
    pub middle_name: String,

    /// Postal address, free text
    pub address: String,

    /// Birth date; `None` when the source text did not parse
    pub birth_date: Option<NaiveDate>,

    /// Email address
    pub email: String,

    /// Phone numbers, normalized to digits and an optional leading `+`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phone_numbers: Vec<String>,
}

impl ContactRecord {
    /// Create a record with names only; remaining fields are empty.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        middle_name: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_name: middle_name.into(),
            ..Default::default()
        }
    }

    /// Text displayed for `field` in the contact table.
    ///
    /// Phone numbers are joined by `", "` so the text can be fed back through the
    /// phone list parser unchanged.
    pub fn display_text(&self, field: ContactField) -> String {
        match field {
            ContactField::FirstName => self.first_name.clone(),
            ContactField::LastName => self.last_name.clone(),
            ContactField::MiddleName => self.middle_name.clone(),
            ContactField::Address => self.address.clone(),
            ContactField::BirthDate => format_birth_date(self.birth_date),
            ContactField::Email => self.email.clone(),
            ContactField::PhoneNumbers => self.phone_numbers.join(", "),
        }
    }

    /// Display text of every column, in table order.
    pub fn cells(&self) -> [String; ContactField::COUNT] {
        ContactField::ALL.map(|field| self.display_text(field))
    }
}

/// A column of the contact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    MiddleName,
    Address,
    BirthDate,
    Email,
    PhoneNumbers,
}

impl ContactField {
    /// Number of columns.
    pub const COUNT: usize = 7;

    /// All columns in table (and file) order.
    pub const ALL: [ContactField; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::MiddleName,
        Self::Address,
        Self::BirthDate,
        Self::Email,
        Self::PhoneNumbers,
    ];

    /// Zero-based column index.
    pub fn column(self) -> usize {
        self as usize
    }

    /// Column for a zero-based index, if any.
    pub fn from_column(column: usize) -> Option<Self> {
        Self::ALL.get(column).copied()
    }

    /// Column header caption.
    pub fn header(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::MiddleName => "Middle name",
            Self::Address => "Address",
            Self::BirthDate => "Birth date",
            Self::Email => "Email",
            Self::PhoneNumbers => "Phone numbers",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::MiddleName => "middle_name",
            Self::Address => "address",
            Self::BirthDate => "birth_date",
            Self::Email => "email",
            Self::PhoneNumbers => "phone_numbers",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ContactField {
    type Err = String;

    /// Accepts a snake_case key (`first_name`), a short alias (`first`, `phone`) or a
    /// column index (`0`..`6`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        if let Ok(column) = key.parse::<usize>() {
            return Self::from_column(column).ok_or_else(|| format!("No column {}", column));
        }
        let field = match key.as_str() {
            "first_name" | "first" => Self::FirstName,
            "last_name" | "last" => Self::LastName,
            "middle_name" | "middle" => Self::MiddleName,
            "address" => Self::Address,
            "birth_date" | "birthday" | "birth" => Self::BirthDate,
            "email" => Self::Email,
            "phone_numbers" | "phones" | "phone" => Self::PhoneNumbers,
            _ => return Err(format!("Unknown column: {}", s)),
        };
        Ok(field)
    }
}
