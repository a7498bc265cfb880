//! Trait definitions for the Podium outline pipeline.
//!
//! The pipeline talks to three external collaborators through these seams:
//! the AI gateway ([`Gateway`]), local key-value persistence
//! ([`KeyValueStore`]) and the render service ([`PresentationRenderer`]).
//! Production implementations live in `podium_gateway` and `podium_storage`;
//! tests substitute in-memory doubles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{Gateway, KeyValueStore, PresentationRenderer};
pub use types::{ExtractedSlide, ServiceStatus};
