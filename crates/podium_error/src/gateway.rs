//! Gateway error types.

/// Failure modes of a single gateway call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GatewayErrorKind {
    /// Gateway answered with a non-success HTTP status
    #[display("Gateway returned {} {}: {}", status, status_text, body)]
    Status {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
        /// Response body, verbatim
        body: String,
    },
    /// Success body lacked `choices[0].message.content`
    #[display("Malformed gateway response: {}", _0)]
    MalformedResponse(String),
    /// Request never completed (connection refused, DNS, TLS, ...)
    #[display("Gateway request failed: {}", _0)]
    Transport(String),
}

/// Gateway error with location tracking.
///
/// # Examples
///
/// ```
/// use podium_error::{GatewayError, GatewayErrorKind};
///
/// let err = GatewayError::new(GatewayErrorKind::Status {
///     status: 503,
///     status_text: "Service Unavailable".to_string(),
///     body: "overloaded".to_string(),
/// });
/// assert!(format!("{}", err).contains("503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The specific failure
    pub kind: GatewayErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl GatewayError {
    /// Create a new gateway error at the current location.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// HTTP status, when the gateway answered at all.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            GatewayErrorKind::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
