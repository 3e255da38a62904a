//! Derived table view with search highlighting and row filtering.

use crate::models::{ContactField, ContactRecord};
use serde::Serialize;

/// One displayed cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCell {
    pub text: String,

    /// The cell contains the current (non-empty) query
    pub highlighted: bool,
}

/// One displayed row, mirroring a record of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Position of the backing record in the store
    pub index: usize,

    pub cells: Vec<TableCell>,

    /// At least one cell matches, or there is no query
    pub visible: bool,
}

/// Read-only view of the contact table for a given search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub query: String,
    pub rows: Vec<TableRow>,
}

/// Case-insensitive substring test. An empty query matches nothing, so that
/// clearing the search box removes every highlight.
pub fn cell_matches(text: &str, query: &str) -> bool {
    !query.is_empty() && text.to_lowercase().contains(&query.to_lowercase())
}

impl TableView {
    /// Build the view of `records` filtered by `query`.
    ///
    /// A row is visible iff the query is empty or at least one of its cells
    /// contains the query, ignoring case.
    pub fn build(records: &[ContactRecord], query: &str) -> Self {
        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let cells: Vec<TableCell> = record
                    .cells()
                    .into_iter()
                    .map(|text| TableCell {
                        highlighted: cell_matches(&text, query),
                        text,
                    })
                    .collect();
                let visible = query.is_empty() || cells.iter().any(|cell| cell.highlighted);
                TableRow {
                    index,
                    cells,
                    visible,
                }
            })
            .collect();

        Self {
            query: query.to_string(),
            rows,
        }
    }

    /// Column captions in display order.
    pub fn headers() -> [&'static str; ContactField::COUNT] {
        ContactField::ALL.map(ContactField::header)
    }

    /// Rows that survive the filter.
    pub fn visible_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|row| row.visible)
    }

    /// Store indices of the rows that survive the filter.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible_rows().map(|row| row.index).collect()
    }

    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ContactRecord> {
        vec![
            ContactRecord {
                email: "anna@example.com".to_string(),
                ..ContactRecord::new("Anna", "Ivanova", "Petrovna")
            },
            ContactRecord {
                email: "boris@mail.ru".to_string(),
                ..ContactRecord::new("Boris", "Sidorov", "Ivanovich")
            },
            ContactRecord {
                email: "vera@example.com".to_string(),
                ..ContactRecord::new("Vera", "Orlova", "Olegovna")
            },
        ]
    }

    #[test]
    fn test_empty_query_shows_everything_unhighlighted() {
        let view = TableView::build(&records(), "");
        assert_eq!(view.visible_indices(), vec![0, 1, 2]);
        assert!(view
            .rows
            .iter()
            .flat_map(|row| &row.cells)
            .all(|cell| !cell.highlighted));
        assert!(!view.is_filtered());
    }

    #[test]
    fn test_email_match_hides_other_rows() {
        let view = TableView::build(&records(), "MAIL.RU");
        assert_eq!(view.visible_indices(), vec![1]);
        let row = &view.rows[1];
        assert!(row.cells[ContactField::Email.column()].highlighted);
        assert!(!row.cells[ContactField::FirstName.column()].highlighted);
    }

    #[test]
    fn test_match_in_any_column() {
        let view = TableView::build(&records(), "ivan");
        // "Ivanova" in row 0 and "Ivanovich" in row 1
        assert_eq!(view.visible_indices(), vec![0, 1]);
    }

    #[test]
    fn test_cyrillic_case_insensitive() {
        assert!(cell_matches("Иванов", "иВАН"));
        assert!(!cell_matches("Иванов", ""));
    }

    #[test]
    fn test_no_match_hides_all() {
        let view = TableView::build(&records(), "zzz");
        assert_eq!(view.visible_rows().count(), 0);
    }

    #[test]
    fn test_headers() {
        assert_eq!(TableView::headers()[6], "Phone numbers");
    }
}
