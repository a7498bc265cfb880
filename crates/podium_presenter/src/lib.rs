//! Outline presenter for Podium.
//!
//! [`Presenter`] owns the outline the user is looking at. It accepts outlines
//! from generation, a JSON import, or an existing presentation file; edits one
//! slide at a time on a scratch copy; and hands the outline back out as a JSON
//! export or a rendered presentation. Every committed change is persisted
//! through an [`OutlineStore`](podium_storage::OutlineStore).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod file;
mod mode;
mod presenter;
mod view;

pub use file::{ExportedFile, timestamped_name};
pub use mode::{EditBuffer, PresenterMode, SlideEdit};
pub use presenter::Presenter;
pub use view::OutlineView;
