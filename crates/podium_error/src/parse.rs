//! Parse error type.

/// Gateway content could not be parsed as JSON after fence stripping.
///
/// The raw text is retained for diagnostics and is never coerced.
///
/// # Examples
///
/// ```
/// use podium_error::ParseError;
///
/// let err = ParseError::new("expected value at line 1 column 1", "Sure! {oops");
/// assert_eq!(err.raw, "Sure! {oops");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Parse Error: {} at line {} in {}", message, line, file)]
pub struct ParseError {
    /// Human-readable parser message
    pub message: String,
    /// The text as received from the gateway
    pub raw: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ParseError {
    /// Create a new parse error at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>, raw: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            raw: raw.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
