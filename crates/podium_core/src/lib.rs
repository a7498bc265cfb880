//! Core data types for the Podium presentation outline pipeline.
//!
//! This crate provides the foundation data types shared by every Podium crate:
//! the slide [`Outline`] produced by generation, the immutable
//! [`AiConfiguration`] snapshot used for one gateway call, and the
//! [`CancellationToken`] that lets a newer attempt supersede an older one.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cancellation;
mod configuration;
mod model;
mod outline;
mod response;
mod slide;

pub use cancellation::CancellationToken;
pub use configuration::{AiConfiguration, AiConfigurationBuilder, ApiKey, AuthType};
pub use model::ModelInfo;
pub use outline::{EstimatedDuration, GenerationMetadata, Outline};
pub use response::{RawResponse, TokenUsage};
pub use slide::{Slide, SlideLabel, SlideType};
