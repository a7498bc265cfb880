//! Client for OpenAI-compatible chat completion gateways.

mod client;
mod dto;

pub use client::GatewayClient;
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage};
