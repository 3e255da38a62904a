//! Line-oriented CSV codec for contact records.
//!
//! Each record is one line of seven comma-separated fields:
//!
//! ```text
//! first,last,middle,address,dd.MM.yyyy,email,phone1;phone2
//! ```
//!
//! There is no header row and fields are never quoted, so a comma inside a
//! free-text field shifts the remaining columns when the file is read back.
//!
//! Decoding is lenient: names, emails and phone numbers are taken verbatim and
//! an unparseable date becomes `None`. Only lines with too few fields are
//! rejected, and those are reported rather than aborting the whole decode.
//! Raw file bytes go through [`decode_bytes`], which reports lines that are not
//! valid UTF-8 and decodes them with replacement characters.

use crate::domain::{format_birth_date, normalize_phone, parse_birth_date};
use crate::error::ContactError;
use crate::models::ContactRecord;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Number of comma-separated fields in a record line.
pub const FIELD_COUNT: usize = 7;

const PHONE_SEPARATOR: &str = ";";

/// Result of decoding a contact file.
#[derive(Debug, Default)]
pub struct DecodeOutcome {
    /// Records admitted, in file order
    pub records: Vec<ContactRecord>,

    /// Line-level problems; each skipped line contributes one entry
    pub errors: Vec<ContactError>,
}

impl DecodeOutcome {
    /// Number of admitted records.
    pub fn admitted(&self) -> usize {
        self.records.len()
    }
}

/// Encode one record as a line, without the trailing newline.
pub fn encode_record(record: &ContactRecord) -> String {
    let phones = record
        .phone_numbers
        .iter()
        .map(|phone| normalize_phone(phone))
        .collect::<Vec<_>>()
        .join(PHONE_SEPARATOR);

    [
        record.first_name.as_str(),
        record.last_name.as_str(),
        record.middle_name.as_str(),
        record.address.as_str(),
        format_birth_date(record.birth_date).as_str(),
        record.email.as_str(),
        phones.as_str(),
    ]
    .join(",")
}

/// Encode records in list order, one `\n`-terminated line each.
pub fn encode<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a ContactRecord>,
{
    let mut out = String::new();
    for record in records {
        out.push_str(&encode_record(record));
        out.push('\n');
    }
    out
}

/// Decode contact lines.
///
/// Never fails as a whole: short lines are reported in
/// [`DecodeOutcome::errors`] as [`ContactError::IncompleteCsvLine`] (1-based line
/// numbers) and decoding carries on with the next line. Blank lines are skipped.
pub fn decode(text: &str) -> DecodeOutcome {
    let mut outcome = DecodeOutcome::default();
    for (index, line) in text.lines().enumerate() {
        decode_line(index + 1, line, &mut outcome);
    }
    outcome
}

/// Decode raw file contents.
///
/// Same as [`decode`], except that a line which is not valid UTF-8 is reported as
/// [`ContactError::InvalidEncoding`] and then decoded with U+FFFD in place of the
/// bad bytes, so its record is still admitted for correction.
pub fn decode_bytes(bytes: &[u8]) -> DecodeOutcome {
    let mut outcome = DecodeOutcome::default();
    for (index, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let line_number = index + 1;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = match std::str::from_utf8(raw) {
            Ok(line) => Cow::Borrowed(line),
            Err(_) => {
                warn!(line = line_number, "Contact line is not valid UTF-8");
                outcome
                    .errors
                    .push(ContactError::InvalidEncoding { line: line_number });
                String::from_utf8_lossy(raw)
            }
        };
        decode_line(line_number, &line, &mut outcome);
    }
    outcome
}

fn decode_line(line_number: usize, line: &str, outcome: &mut DecodeOutcome) {
    if line.is_empty() {
        return;
    }

    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < FIELD_COUNT {
        warn!(
            line = line_number,
            fields = parts.len(),
            "Skipping incomplete contact line"
        );
        outcome
            .errors
            .push(ContactError::IncompleteCsvLine { line: line_number });
        return;
    }

    let birth_date = parse_birth_date(parts[4]);
    if birth_date.is_none() {
        debug!(line = line_number, date = parts[4], "Unparseable birth date");
    }

    outcome.records.push(ContactRecord {
        first_name: parts[0].to_string(),
        last_name: parts[1].to_string(),
        middle_name: parts[2].to_string(),
        address: parts[3].to_string(),
        birth_date,
        email: parts[5].to_string(),
        phone_numbers: parts[6]
            .split(PHONE_SEPARATOR)
            .map(str::to_string)
            .collect(),
    });
}
