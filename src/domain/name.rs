//! Name validation for first, last and middle names.

use once_cell::sync::Lazy;
use regex::Regex;

/// One uppercase letter, then letters, hyphens or spaces, ending in a lowercase letter.
/// Latin and Cyrillic alphabets, `Ё`/`ё` included.
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-ZА-ЯЁ][A-Za-zА-Яа-яёЁ\- ]*[a-zа-яё]$").expect("name pattern is valid")
});

/// Check whether `name` (after trimming) is an acceptable person name.
///
/// # Example
///
/// ```
/// use contact_book::domain::is_valid_name;
///
/// assert!(is_valid_name("Anna-Maria"));
/// assert!(is_valid_name("  Ёжиков "));
/// assert!(!is_valid_name("john"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name.trim())
}
