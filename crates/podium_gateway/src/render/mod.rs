//! Client for the external presentation render service.

mod client;
mod dto;

pub use client::RenderServiceClient;
pub use dto::{ErrorBody, ExtractRequest, ExtractResponse, RenderRequest};
