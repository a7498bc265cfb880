//! Gateway configuration snapshot.

use derive_builder::Builder;
use derive_getters::Getters;
use podium_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Authentication header shape expected by the gateway.
///
/// Exactly one header is applied per call.
///
/// # Examples
///
/// ```
/// use podium_core::AuthType;
/// use std::str::FromStr;
///
/// let auth = AuthType::from_str("api-key-header").unwrap();
/// assert_eq!(auth, AuthType::ApiKeyHeader);
/// assert_eq!(auth.header("secret"), ("x-api-key", "secret".to_string()));
/// assert_eq!(AuthType::Bearer.header("k").1, "Bearer k");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AuthType {
    /// `Authorization: Bearer <key>`
    #[default]
    Bearer,
    /// `x-api-key: <key>`
    ApiKeyHeader,
    /// `x-goog-api-key: <key>`
    GoogleHeader,
}

impl AuthType {
    /// Header name and value carrying `key` for this scheme.
    pub fn header(&self, key: &str) -> (&'static str, String) {
        match self {
            AuthType::Bearer => ("Authorization", format!("Bearer {}", key)),
            AuthType::ApiKeyHeader => ("x-api-key", key.to_string()),
            AuthType::GoogleHeader => ("x-goog-api-key", key.to_string()),
        }
    }
}

/// Gateway credential. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Default, derive_more::From)]
pub struct ApiKey(String);

impl ApiKey {
    /// Expose the secret for header construction.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when no key was configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "ApiKey(<empty>)")
        } else {
            write!(f, "ApiKey(<redacted>)")
        }
    }
}

/// Immutable snapshot of everything one gateway call needs.
///
/// Resolved from configuration once per request; never mutated afterwards.
///
/// # Examples
///
/// ```
/// use podium_core::{AiConfiguration, AuthType};
///
/// let config = AiConfiguration::builder()
///     .gateway_url("https://gateway.example.com/")
///     .api_key("secret")
///     .model("gpt-4o-mini")
///     .auth_type(AuthType::Bearer)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.url(), "https://gateway.example.com/chat/completions");
/// assert_eq!(*config.max_tokens(), 4000);
/// assert!(config.validate().is_ok());
/// assert!(!format!("{:?}", config).contains("secret"));
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Getters)]
pub struct AiConfiguration {
    /// Base URL of the gateway
    #[builder(setter(into))]
    gateway_url: String,
    /// Path appended to the base URL
    #[builder(setter(into), default = "\"/chat/completions\".to_string()")]
    endpoint: String,
    /// Authentication header shape
    #[builder(default)]
    auth_type: AuthType,
    /// Gateway credential
    #[builder(setter(into), default)]
    api_key: ApiKey,
    /// Model identifier sent in the request body
    #[builder(setter(into))]
    model: String,
    /// Sampling temperature in [0, 1]
    #[builder(default = "0.7")]
    temperature: f32,
    /// Completion token ceiling (> 0)
    #[builder(default = "4000")]
    max_tokens: u32,
    /// Per-call timeout in milliseconds (> 0)
    #[builder(default = "60_000")]
    timeout_ms: u64,
}

impl AiConfiguration {
    /// Creates a new configuration builder.
    pub fn builder() -> AiConfigurationBuilder {
        AiConfigurationBuilder::default()
    }

    /// Full request URL: base URL and endpoint joined by exactly one slash.
    pub fn url(&self) -> String {
        let base = self.gateway_url.trim_end_matches('/');
        let endpoint = self.endpoint.trim_start_matches('/');
        if endpoint.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, endpoint)
        }
    }

    /// Per-call timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Validates ranges and required values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gateway_url.trim().is_empty() {
            return Err(ConfigError::invalid("gateway_url", "must not be empty"));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::invalid("model", "must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(ConfigError::invalid(
                "temperature",
                format!("must be in [0, 1], got {}", self.temperature),
            ));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::invalid("max_tokens", "must be greater than 0"));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::invalid("timeout_ms", "must be greater than 0"));
        }
        Ok(())
    }
}
