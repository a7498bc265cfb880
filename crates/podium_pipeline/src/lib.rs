//! Outline generation pipeline.
//!
//! The pipeline is a linear flow:
//!
//! 1. [`validate_notes`] - the validation gate, run before anything else
//! 2. [`build_prompt`] - deterministic prompt text from notes and hints
//! 3. a [`Gateway`](podium_interface::Gateway) call
//! 4. [`parse_and_validate`] - fence stripping, JSON parsing, schema checks
//!
//! [`OutlineGenerator`] runs the whole flow and enforces that at most one
//! attempt is live at a time. Steps 1, 2 and 4 are pure and usable on their own.
//!
//! # Example
//!
//! ```
//! use podium_pipeline::parse_and_validate;
//!
//! let raw = "```json\n{\"slides\":[{\"title\":\"Intro\"},{\"title\":\"Details\"}]}\n```";
//! let outline = parse_and_validate(raw).unwrap();
//! assert_eq!(outline.slides[1].slide_number, 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod parser;
mod prompt;

pub use generator::{GenerationRequest, GenerationRequestBuilder, OutlineGenerator};
pub use parser::{parse_and_validate, strip_code_fences, validate_outline_value};
pub use prompt::{build_prompt, validate_notes};
