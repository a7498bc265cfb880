//! HTTP clients for Podium's external services.
//!
//! - [`GatewayClient`] - single-turn chat completions against an OpenAI-compatible gateway
//! - [`RenderServiceClient`] - the service that writes and reads `.pptx` files
//! - [`AnalyticsClient`] - best-effort usage events for the analytics collector
//!
//! # Example
//!
//! ```no_run
//! use podium_core::{AiConfiguration, AuthType, CancellationToken};
//! use podium_gateway::GatewayClient;
//! use podium_interface::Gateway;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AiConfiguration::builder()
//!     .gateway_url("https://generativelanguage.googleapis.com/v1beta/openai")
//!     .auth_type(AuthType::GoogleHeader)
//!     .api_key("...")
//!     .model("gemini-2.0-flash")
//!     .build()?;
//!
//! let response = GatewayClient::new()
//!     .send(&config, "Outline a talk on Rust", &CancellationToken::new())
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analytics;
mod chat;
mod render;

pub use analytics::{AnalyticsClient, TimeSavings};
pub use chat::{ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage, GatewayClient};
pub use render::{ErrorBody, ExtractRequest, ExtractResponse, RenderRequest, RenderServiceClient};
