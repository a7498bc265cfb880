//! Top-level error wrapper types.

use crate::{
    CancelledError, ConfigError, GatewayError, ParseError, PresenterError, RenderError,
    ServerError, StorageError, TimeoutError, ValidationError,
};

/// Message shown to the user for gateway failures and timeouts.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "The AI service is unavailable, please try again.";

/// Every error condition a Podium operation can surface.
///
/// # Examples
///
/// ```
/// use podium_error::{PodiumError, TimeoutError};
///
/// let err: PodiumError = TimeoutError::new(30_000).into();
/// assert!(format!("{}", err).contains("30000"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PodiumErrorKind {
    /// Caller-supplied input or outline shape is malformed
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Gateway returned a failure status or an unusable body
    #[from(GatewayError)]
    Gateway(GatewayError),
    /// Gateway call exceeded the configured timeout
    #[from(TimeoutError)]
    Timeout(TimeoutError),
    /// Gateway content was not valid JSON
    #[from(ParseError)]
    Parse(ParseError),
    /// Persistence layer failure
    #[from(StorageError)]
    Storage(StorageError),
    /// Attempt was cancelled or superseded
    #[from(CancelledError)]
    Cancelled(CancelledError),
    /// Configuration could not be loaded or resolved
    #[from(ConfigError)]
    Config(ConfigError),
    /// Presenter state machine rejected an operation
    #[from(PresenterError)]
    Presenter(PresenterError),
    /// Render service failure
    #[from(RenderError)]
    Render(RenderError),
    /// Analytics collector failure
    #[from(ServerError)]
    Server(ServerError),
}

/// Podium error with kind discrimination.
///
/// # Examples
///
/// ```
/// use podium_error::{PodiumError, PodiumErrorKind, PodiumResult, ConfigError, ConfigErrorKind};
///
/// fn might_fail() -> PodiumResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::UnknownModel("gpt-9".to_string())))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), PodiumErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Podium Error: {}", _0)]
pub struct PodiumError(Box<PodiumErrorKind>);

impl PodiumError {
    /// Create a new error from a kind.
    pub fn new(kind: PodiumErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PodiumErrorKind {
        &self.0
    }

    /// True when the error came from the gateway boundary (status, body, or timeout).
    ///
    /// Upstream callers treat both the same way: abort, keep prior state, no retry.
    pub fn is_service_unavailable(&self) -> bool {
        matches!(
            self.kind(),
            PodiumErrorKind::Gateway(_) | PodiumErrorKind::Timeout(_)
        )
    }

    /// True when the attempt was cancelled rather than failed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind(), PodiumErrorKind::Cancelled(_))
    }

    /// Short, human-readable message suitable for showing to the user.
    ///
    /// # Examples
    ///
    /// ```
    /// use podium_error::{GatewayError, GatewayErrorKind, PodiumError, SERVICE_UNAVAILABLE_MESSAGE};
    ///
    /// let err: PodiumError = GatewayError::new(GatewayErrorKind::Transport("refused".into())).into();
    /// assert_eq!(err.user_message(), SERVICE_UNAVAILABLE_MESSAGE);
    /// ```
    pub fn user_message(&self) -> String {
        match self.kind() {
            PodiumErrorKind::Validation(e) => e.kind.to_string(),
            PodiumErrorKind::Parse(e) => e.message.clone(),
            PodiumErrorKind::Gateway(_) | PodiumErrorKind::Timeout(_) => {
                SERVICE_UNAVAILABLE_MESSAGE.to_string()
            }
            PodiumErrorKind::Cancelled(_) => "Generation was cancelled.".to_string(),
            PodiumErrorKind::Storage(e) => e.kind.to_string(),
            PodiumErrorKind::Config(e) => e.kind.to_string(),
            PodiumErrorKind::Presenter(e) => e.kind.to_string(),
            PodiumErrorKind::Render(e) => e.kind.to_string(),
            PodiumErrorKind::Server(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to PodiumErrorKind
impl<T> From<T> for PodiumError
where
    T: Into<PodiumErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Podium operations.
pub type PodiumResult<T> = std::result::Result<T, PodiumError>;
