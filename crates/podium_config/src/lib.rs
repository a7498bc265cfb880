//! Configuration store for Podium.
//!
//! Settings are layered from TOML files and the environment, then resolved
//! into the immutable [`podium_core::AiConfiguration`] snapshot that a single
//! gateway call consumes.
//!
//! ```no_run
//! use podium_config::PodiumConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PodiumConfig::load()?;
//! let ai = config.resolve(None)?;
//! println!("Using {} at {}", ai.model(), ai.url());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{
    AnalyticsSettings, AudienceEntry, GatewaySettings, GenerationSettings, ModelEntry,
    PodiumConfig, RenderSettings, StorageSettings,
};
