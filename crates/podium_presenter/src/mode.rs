//! Presenter modes and the edit buffer.

use podium_core::{Slide, SlideType};

/// Presenter mode determines which operations are allowed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum PresenterMode {
    /// No outline loaded
    Empty,
    /// Showing the committed outline
    Displaying,
    /// Editing one slide on a scratch copy
    Editing,
}

/// Scratch copy of the slide being edited.
///
/// Changes land here first and only reach the outline on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    /// 0-based index of the slide in the outline
    pub index: usize,
    /// Working copy of the slide
    pub scratch: Slide,
}

/// One change to the slide in the edit buffer.
///
/// Empty lists and blank notes clear the field rather than storing an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideEdit {
    /// Replace the title (must not be blank)
    Title(String),
    /// Replace the content lines
    Content(Vec<String>),
    /// Replace the bullet points
    Bullets(Vec<String>),
    /// Replace or clear the speaker notes
    PresenterNotes(Option<String>),
    /// Replace or clear the slide type
    SlideType(Option<SlideType>),
}
