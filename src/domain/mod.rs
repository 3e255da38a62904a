//! Field rules for contact data.
//!
//! This module contains the pure validators for names, email addresses and
//! birth dates, plus the parser that turns a free-text phone field into a list
//! of normalized numbers. None of them touch UI or store state.

pub mod birth_date;
pub mod email;
pub mod name;
pub mod phone;

pub use birth_date::{format_birth_date, parse_birth_date, validate_birth_date, DATE_FORMAT};
pub use email::is_valid_email;
pub use name::is_valid_name;
pub use phone::{normalize_phone, parse_phone_list};
