//! Data models for the contact book.
//!
//! This module contains the contact record itself and the column enumeration
//! used to address a single field of a record in the table.

pub mod contact;

pub use contact::{ContactField, ContactRecord};
