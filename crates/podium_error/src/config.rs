//! Configuration error types.

/// Configuration failures, raised while loading files or resolving a model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Configuration sources could not be read or deserialized
    #[display("Failed to load configuration: {}", _0)]
    Load(String),
    /// Requested model key is not configured
    #[display("Unknown model: {}", _0)]
    UnknownModel(String),
    /// API key environment variable is unset or empty
    #[display("API key not set: environment variable {} is empty", _0)]
    MissingApiKey(String),
    /// Auth scheme name is not recognised
    #[display("Unknown auth type: {}", _0)]
    UnknownAuthType(String),
    /// A value is outside its permitted range
    #[display("Invalid value for '{}': {}", field, reason)]
    InvalidValue {
        /// Field name
        field: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use podium_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingApiKey("PODIUM_API_KEY".into()));
/// assert!(format!("{}", err).contains("PODIUM_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific failure
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for [`ConfigErrorKind::InvalidValue`].
    #[track_caller]
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        })
    }
}
