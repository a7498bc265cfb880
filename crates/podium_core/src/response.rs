//! Raw gateway responses.

use serde::{Deserialize, Serialize};

/// Token accounting reported by the gateway, when it reports any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: Option<u64>,
    /// Tokens in the completion
    pub completion_tokens: Option<u64>,
    /// Total tokens
    pub total_tokens: Option<u64>,
}

/// The text content of one successful gateway call, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    /// `choices[0].message.content`, verbatim
    pub content: String,
    /// Model the gateway reports having used
    pub model: Option<String>,
    /// Token usage, if reported
    pub usage: Option<TokenUsage>,
}

impl RawResponse {
    /// Response carrying only content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: None,
            usage: None,
        }
    }
}
