//! Validation error types.

/// Broken invariants on caller input or on an outline document.
///
/// Validation is fail-fast: the first violated invariant is reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Notes are shorter than the configured minimum
    #[display(
        "Notes must be at least {} characters long (got {})",
        minimum,
        actual
    )]
    NotesTooShort {
        /// Required minimum length in characters
        minimum: usize,
        /// Actual length in characters
        actual: usize,
    },
    /// The document is not a JSON object
    #[display("Outline must be a JSON object")]
    NotAnObject,
    /// The `slides` field is absent
    #[display("Outline is missing the 'slides' field")]
    MissingSlides,
    /// The `slides` field is not an array
    #[display("Outline 'slides' must be an array")]
    SlidesNotArray,
    /// The `slides` array is empty
    #[display("Outline must contain at least one slide")]
    EmptySlides,
    /// A slide entry is not a JSON object
    #[display("Slide {} must be a JSON object", _0)]
    SlideNotObject(usize),
    /// A slide has no usable title
    #[display("Slide {} is missing a title", _0)]
    MissingTitle(usize),
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use podium_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::MissingTitle(1));
/// assert_eq!(err.kind.to_string(), "Slide 1 is missing a title");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The broken invariant
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error at the current location.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
