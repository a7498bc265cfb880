//! Error types for the analytics collector.

/// Error kinds for collector operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ServerErrorKind {
    /// Database could not be opened or migrated
    #[display("Database initialization failed: {}", _0)]
    DatabaseInit(String),

    /// Insert or query failed
    #[display("Database query failed: {}", _0)]
    Query(String),

    /// Request body was not a flat JSON object
    #[display("Invalid payload: {}", _0)]
    InvalidPayload(String),

    /// Listener could not be bound or the server stopped unexpectedly
    #[display("Server failed: {}", _0)]
    Serve(String),
}

/// Error wrapper with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The error kind
    pub kind: ServerErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
