//! Model identity hints.

use serde::{Deserialize, Serialize};

/// Identity of the model behind the gateway, offered to the prompt as a hint.
///
/// # Examples
///
/// ```
/// use podium_core::ModelInfo;
///
/// let info = ModelInfo::new("GPT-4o mini", "OpenAI", "fast");
/// assert_eq!(info.provider, "OpenAI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Display name of the model
    pub name: String,
    /// Company or service providing the model
    pub provider: String,
    /// Quality tier label ("fast", "balanced", "premium", ...)
    pub quality: String,
}

impl ModelInfo {
    /// Create a model identity hint.
    pub fn new(
        name: impl Into<String>,
        provider: impl Into<String>,
        quality: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
            quality: quality.into(),
        }
    }
}
