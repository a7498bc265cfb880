//! Podium turns speaker notes into a slide outline.
//!
//! Notes go through a validation gate and a deterministic prompt, are sent to
//! an OpenAI-compatible AI gateway, and come back as JSON that is validated
//! into an [`Outline`]. The outline is persisted locally, can be edited slide
//! by slide, and is rendered to a `.pptx` by an external render service.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use podium::{PodiumConfig, Services};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let services = Services::from_config(PodiumConfig::load()?)?;
//!     let generator = services.generator(None)?;
//!     let request = services.request(std::fs::read_to_string("notes.txt")?, Some("executive"), None)?;
//!
//!     let mut presenter = services.presenter().await;
//!     let outline = presenter.generate(&generator, &request).await?;
//!     println!("{}", podium::OutlineView(outline));
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Podium is organized as a workspace with focused crates:
//!
//! - `podium_error` - Error types
//! - `podium_core` - Outline, slide, and gateway configuration types
//! - `podium_config` - Layered TOML configuration
//! - `podium_interface` - Gateway, storage, and renderer traits
//! - `podium_gateway` - HTTP clients for the gateway, render service, and analytics
//! - `podium_storage` - Key-value backends and the outline store
//! - `podium_pipeline` - Prompt, parser, and the outline generator
//! - `podium_presenter` - Presenter state machine
//!
//! This crate (`podium`) re-exports everything for convenience.

mod services;

pub use services::Services;

pub use podium_config::*;
pub use podium_core::*;
pub use podium_error::*;
pub use podium_gateway::*;
pub use podium_interface::*;
pub use podium_pipeline::*;
pub use podium_presenter::*;
pub use podium_storage::*;
