//! Cancellation error type.

/// A generation attempt was cancelled, either explicitly or by a newer attempt.
///
/// Any result the cancelled attempt produced afterwards has been discarded.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Cancelled: {} at line {} in {}", reason, line, file)]
pub struct CancelledError {
    /// Why the attempt was cancelled
    pub reason: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl CancelledError {
    /// Create a new cancellation error at the current location.
    #[track_caller]
    pub fn new(reason: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            reason: reason.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
