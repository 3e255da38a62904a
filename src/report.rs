//! Import report accumulated while loading a contact file.

use std::fmt;

/// Summary of a bulk import: how many records were admitted and every problem met
/// along the way (short lines as well as fields flagged for correction).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Records admitted into the store
    pub added: usize,

    /// Lines that were skipped or decoded with replacement characters; writing
    /// the store back would not reproduce them
    pub damaged_lines: usize,

    /// Problems in the order they were found
    pub messages: Vec<String>,

    limit: Option<usize>,
}

impl ImportReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of messages rendered by `Display`; the rest are counted.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Record a problem.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Whether the import met no problems.
    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether saving the store would change or drop lines of the source file.
    pub fn loses_lines(&self) -> bool {
        self.damaged_lines > 0
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Import finished.\nContacts added: {}", self.added)?;
        if self.messages.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        let shown = self.limit.unwrap_or(self.messages.len());
        for message in self.messages.iter().take(shown) {
            write!(f, "\n{}", message)?;
        }
        if self.messages.len() > shown {
            write!(f, "\n... and {} more", self.messages.len() - shown)?;
        }
        Ok(())
    }
}
