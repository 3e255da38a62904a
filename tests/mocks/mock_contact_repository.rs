use contact_book::error::{ContactError, ContactResult};
use contact_book::repositories::ContactRepository;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Mock contact repository for testing.
///
/// Keeps the stored bytes in memory, can be told to fail every open, and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    bytes: RefCell<Vec<u8>>,
    failing: bool,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository already holding `text`.
    pub fn with_text(text: &str) -> Self {
        Self::with_bytes(text.as_bytes())
    }

    /// Create a repository holding raw bytes, which need not be valid UTF-8.
    pub fn with_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: RefCell::new(bytes.to_vec()),
            ..Self::default()
        }
    }

    /// Create a repository whose reads and writes always fail to open.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Currently stored text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }

    fn open_failure(&self) -> ContactError {
        ContactError::FileOpenFailure {
            path: PathBuf::from("mock://contacts.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "mock failure"),
        }
    }
}

impl ContactRepository for MockContactRepository {
    fn read_all(&self) -> ContactResult<Vec<u8>> {
        self.track_call("read_all");
        if self.failing {
            return Err(self.open_failure());
        }
        Ok(self.bytes.borrow().clone())
    }

    fn write_all(&self, text: &str) -> ContactResult<()> {
        self.track_call("write_all");
        if self.failing {
            return Err(self.open_failure());
        }
        *self.bytes.borrow_mut() = text.as_bytes().to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "mock://contacts.csv".to_string()
    }
}
