use crate::error::ContactResult;

/// Backing storage for the contact file.
///
/// Provides abstraction over where encoded contact text lives, enabling
/// different implementations (file on disk, in-memory mock).
pub trait ContactRepository {
    /// Read the stored bytes. Decoding them, including any bad encoding, is
    /// left to the caller.
    fn read_all(&self) -> ContactResult<Vec<u8>>;

    /// Replace the stored text.
    fn write_all(&self, text: &str) -> ContactResult<()>;

    /// Short description of the storage location, for logs.
    fn location(&self) -> String;
}
