//! Timeout error type.

/// The gateway call exceeded its configured duration.
///
/// Callers treat this exactly like a [`GatewayError`](crate::GatewayError).
///
/// # Examples
///
/// ```
/// use podium_error::TimeoutError;
///
/// let err = TimeoutError::new(1500);
/// assert_eq!(err.timeout_ms, 1500);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Timeout Error: gateway call timed out after {} ms at line {} in {}", timeout_ms, line, file)]
pub struct TimeoutError {
    /// Configured timeout that elapsed
    pub timeout_ms: u64,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TimeoutError {
    /// Create a new timeout error at the current location.
    #[track_caller]
    pub fn new(timeout_ms: u64) -> Self {
        let location = std::panic::Location::caller();
        Self {
            timeout_ms,
            line: location.line(),
            file: location.file(),
        }
    }
}
