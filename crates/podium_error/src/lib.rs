//! Error types for the Podium workspace.
//!
//! This crate provides the error taxonomy used throughout the outline pipeline.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The pipeline-facing errors are:
//! - [`ValidationError`] - caller input or outline shape is malformed
//! - [`GatewayError`] - the AI gateway answered with a failure or an unusable body
//! - [`TimeoutError`] - the gateway call exceeded its configured duration
//! - [`ParseError`] - the gateway content was not JSON after cleanup
//! - [`StorageError`] - persistence failed (swallowed at the store boundary)
//! - [`CancelledError`] - the attempt was superseded or cancelled
//!
//! # Examples
//!
//! ```
//! use podium_error::{PodiumResult, ValidationError, ValidationErrorKind};
//!
//! fn check(notes: &str) -> PodiumResult<()> {
//!     if notes.len() < 100 {
//!         Err(ValidationError::new(ValidationErrorKind::NotesTooShort {
//!             minimum: 100,
//!             actual: notes.len(),
//!         }))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("too short").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cancelled;
mod config;
mod error;
mod gateway;
mod parse;
mod presenter;
mod render;
mod server;
mod storage;
mod timeout;
mod validation;

pub use cancelled::CancelledError;
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{PodiumError, PodiumErrorKind, PodiumResult, SERVICE_UNAVAILABLE_MESSAGE};
pub use gateway::{GatewayError, GatewayErrorKind};
pub use parse::ParseError;
pub use presenter::{PresenterError, PresenterErrorKind};
pub use render::{RenderError, RenderErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use timeout::TimeoutError;
pub use validation::{ValidationError, ValidationErrorKind};
