//! Phone list parsing and normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Loose phone shape: optional `+`, country code, optional parenthesized area code,
/// then digit groups separated by single spaces or hyphens.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?\s?[0-9]{1,3}[\s-]?(\([0-9]+\))?[\s-]?[0-9]+([\s-]?[0-9]+)*$")
        .expect("phone pattern is valid")
});

/// Split a comma-separated phone field into normalized numbers.
///
/// Candidates that do not look like a phone number are dropped and logged.
/// Order and duplicates are preserved. An empty result means the field holds
/// no usable number at all.
///
/// # Example
///
/// ```
/// use contact_book::domain::parse_phone_list;
///
/// let numbers = parse_phone_list("+7 (495) 123-45-67, abc, 88001234567");
/// assert_eq!(numbers, vec!["+74951234567", "88001234567"]);
/// ```
pub fn parse_phone_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let candidate = token.trim();
            if PHONE_REGEX.is_match(candidate) {
                Some(
                    candidate
                        .chars()
                        .filter(|c| c.is_ascii_digit() || *c == '+')
                        .collect(),
                )
            } else {
                debug!(candidate, "Dropping invalid phone number");
                None
            }
        })
        .collect()
}

/// Normalize a stored phone string for writing to disk.
///
/// Anything other than digits, `+`, whitespace and `-` is removed first, then
/// spaces and hyphens are squeezed out.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+' || c.is_whitespace() || *c == '-')
        .filter(|c| *c != ' ' && *c != '-')
        .collect()
}
