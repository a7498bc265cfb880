//! Render service error types.

/// Failures talking to the external presentation render service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RenderErrorKind {
    /// Request never completed
    #[display("Render service request failed: {}", _0)]
    Transport(String),
    /// Service answered with a failure status
    #[display("Render service returned {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from the service body
        message: String,
    },
    /// Service answered with an unexpected body
    #[display("Unexpected render service response: {}", _0)]
    InvalidResponse(String),
}

/// Render service error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at line {} in {}", kind, line, file)]
pub struct RenderError {
    /// The specific failure
    pub kind: RenderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl RenderError {
    /// Create a new render error at the current location.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
