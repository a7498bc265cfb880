//! Presenter state machine errors.

/// Operations the presenter refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PresenterErrorKind {
    /// Operation is not allowed in the current state
    #[display("Cannot {} while {}", operation, state)]
    InvalidState {
        /// Requested operation
        operation: String,
        /// Current presenter state
        state: String,
    },
    /// Slide number does not exist in the outline
    #[display("Slide {} does not exist (outline has {} slides)", requested, available)]
    SlideOutOfRange {
        /// Requested 1-based slide number
        requested: usize,
        /// Number of slides in the outline
        available: usize,
    },
    /// Import document was unusable
    #[display("Import failed: {}", _0)]
    Import(String),
    /// Export could not be serialized
    #[display("Export failed: {}", _0)]
    Export(String),
}

/// Presenter error with location tracking.
///
/// # Examples
///
/// ```
/// use podium_error::{PresenterError, PresenterErrorKind};
///
/// let err = PresenterError::new(PresenterErrorKind::Import("missing slides".into()));
/// assert!(err.kind.to_string().starts_with("Import failed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Presenter Error: {} at line {} in {}", kind, line, file)]
pub struct PresenterError {
    /// The specific refusal
    pub kind: PresenterErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl PresenterError {
    /// Create a new presenter error at the current location.
    #[track_caller]
    pub fn new(kind: PresenterErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for [`PresenterErrorKind::InvalidState`].
    #[track_caller]
    pub fn invalid_state(operation: impl Into<String>, state: impl ToString) -> Self {
        Self::new(PresenterErrorKind::InvalidState {
            operation: operation.into(),
            state: state.to_string(),
        })
    }
}
