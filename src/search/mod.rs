//! Search over the contact table.
//!
//! This module derives a read-only view of the records for rendering: every
//! cell that contains the query is highlighted and rows without any such cell
//! are hidden.

pub mod table_view;

pub use table_view::{cell_matches, TableCell, TableRow, TableView};
