use super::traits::ContactRepository;
use crate::error::{ContactError, ContactResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contact storage in a single CSV file on disk.
///
/// Reads and writes are synchronous; a failure to open the file is reported
/// once as [`ContactError::FileOpenFailure`] with no retry.
#[derive(Debug, Clone)]
pub struct CsvFileRepository {
    path: PathBuf,
}

impl CsvFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file currently exists.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn open_failure(&self, source: std::io::Error) -> ContactError {
        ContactError::FileOpenFailure {
            path: self.path.clone(),
            source,
        }
    }
}

impl ContactRepository for CsvFileRepository {
    fn read_all(&self) -> ContactResult<Vec<u8>> {
        debug!(path = %self.path.display(), "Reading contact file");
        fs::read(&self.path).map_err(|e| self.open_failure(e))
    }

    fn write_all(&self, text: &str) -> ContactResult<()> {
        debug!(path = %self.path.display(), bytes = text.len(), "Writing contact file");
        fs::write(&self.path, text).map_err(|e| self.open_failure(e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
