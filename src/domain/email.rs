//! Email address validation.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// Check whether `email` (after trimming) has the shape `local@domain.tld`.
///
/// The local part may hold letters, digits, `.`, `_` and `-`; the domain may hold
/// letters, digits, `.` and `-`; the top-level domain is two or more letters.
///
/// # Example
///
/// ```
/// use contact_book::domain::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("user@example.c"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}
