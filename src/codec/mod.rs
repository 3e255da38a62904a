//! On-disk contact formats.
//!
//! The contact book persists records as unquoted comma-separated lines; see
//! [`csv`] for the exact layout.

pub mod csv;

pub use csv::{decode, decode_bytes, encode, encode_record, DecodeOutcome, FIELD_COUNT};
