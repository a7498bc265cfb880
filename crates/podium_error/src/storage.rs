//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write a value
    #[display("Failed to write value: {}", _0)]
    Write(String),
    /// Failed to read a value
    #[display("Failed to read value: {}", _0)]
    Read(String),
    /// Failed to remove a value
    #[display("Failed to remove value: {}", _0)]
    Remove(String),
    /// Key cannot be mapped onto the backend
    #[display("Invalid storage key: {}", _0)]
    InvalidKey(String),
    /// Value could not be encoded for storage
    #[display("Failed to encode value: {}", _0)]
    Encode(String),
    /// Storage backend is unavailable
    #[display("Storage unavailable: {}", _0)]
    Unavailable(String),
}

/// Storage error with location tracking.
///
/// The outline store never propagates these; they are logged and the
/// operation continues as if given an empty result.
///
/// # Examples
///
/// ```
/// use podium_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Unavailable("disk full".to_string()));
/// assert!(format!("{}", err).contains("unavailable"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
