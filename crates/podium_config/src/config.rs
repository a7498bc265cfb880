//! Configuration structures for the outline pipeline.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from podium.toml)
//! - User overrides (~/.config/podium/podium.toml, then ./podium.toml)
//! - Environment overrides (`PODIUM_GENERATION__TEMPERATURE=0.3`)

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use podium_core::{AiConfiguration, AuthType, ModelInfo};
use podium_error::{ConfigError, ConfigErrorKind, PodiumResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../podium.toml");

/// Where and how to reach the AI gateway.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GatewaySettings {
    /// Base URL of the gateway
    pub url: String,

    /// Path appended to the base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Authentication scheme: `bearer`, `api-key-header` or `google-header`
    #[serde(default = "default_auth")]
    pub auth: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_endpoint() -> String {
    "/chat/completions".to_string()
}

fn default_auth() -> String {
    AuthType::Bearer.to_string()
}

fn default_api_key_env() -> String {
    "PODIUM_API_KEY".to_string()
}

/// Generation defaults applied to every model unless the model overrides them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationSettings {
    /// Key into `[models]` used when the caller names none
    pub default_model: String,

    /// Sampling temperature in [0, 1]
    pub temperature: f32,

    /// Completion token ceiling
    pub max_tokens: u32,

    /// Per-call timeout in milliseconds
    pub timeout_ms: u64,

    /// Validation gate: minimum trimmed length of the user's notes
    #[serde(default = "default_min_notes_length")]
    pub min_notes_length: usize,
}

fn default_min_notes_length() -> usize {
    100
}

/// One selectable model.
///
/// # Example
///
/// ```toml
/// [models.gpt-4o]
/// id = "gpt-4o"
/// name = "GPT-4o"
/// provider = "OpenAI"
/// quality = "premium"
/// temperature = 0.4   # overrides [generation]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelEntry {
    /// Identifier sent to the gateway
    pub id: String,

    /// Display name
    pub name: String,

    /// Providing company
    pub provider: String,

    /// Quality tier label
    #[serde(default)]
    pub quality: String,

    /// Temperature override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Token ceiling override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ModelEntry {
    /// Identity hint handed to the prompt builder.
    pub fn info(&self) -> ModelInfo {
        ModelInfo::new(&self.name, &self.provider, &self.quality)
    }
}

/// Audience-targeting text appended to the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AudienceEntry {
    /// Instruction text describing the audience
    pub modifier: String,
}

/// Local persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Directory holding persisted state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// Render service settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderSettings {
    /// Base URL of the render service
    pub url: String,
}

/// Analytics collector settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct AnalyticsSettings {
    /// Base URL of the collector
    #[serde(default)]
    pub url: String,

    /// Whether usage events are posted at all
    #[serde(default)]
    pub enabled: bool,
}

/// Top-level Podium configuration.
///
/// Loads configuration from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from podium.toml)
/// 2. User config in home directory (~/.config/podium/podium.toml)
/// 3. User config in current directory (./podium.toml)
/// 4. Environment variables prefixed `PODIUM_`
///
/// # Example
///
/// ```
/// use podium_config::PodiumConfig;
///
/// let config = PodiumConfig::bundled().unwrap();
/// assert_eq!(config.generation.min_notes_length, 100);
/// assert!(config.models.contains_key(&config.generation.default_model));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PodiumConfig {
    /// Gateway connection
    pub gateway: GatewaySettings,

    /// Generation defaults
    pub generation: GenerationSettings,

    /// Selectable models by key
    #[serde(default)]
    pub models: HashMap<String, ModelEntry>,

    /// Audience modifiers by key
    #[serde(default)]
    pub audiences: HashMap<String, AudienceEntry>,

    /// Local persistence
    #[serde(default)]
    pub storage: StorageSettings,

    /// Render service
    pub render: RenderSettings,

    /// Analytics collector
    #[serde(default)]
    pub analytics: AnalyticsSettings,
}

impl PodiumConfig {
    /// Load only the bundled defaults, ignoring user files and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file cannot be parsed.
    #[instrument]
    pub fn bundled() -> PodiumResult<Self> {
        Self::deserialize(
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)),
        )
    }

    /// Load configuration from a specific file path layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> PodiumResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml));
        Self::deserialize(builder)
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file or variable cannot be parsed.
    #[instrument]
    pub fn load() -> PodiumResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/podium/podium.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("podium").required(false))
            .add_source(
                Environment::with_prefix("PODIUM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::deserialize(builder)
    }

    fn deserialize(builder: ConfigBuilder<DefaultState>) -> PodiumResult<Self> {
        builder
            .build()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Load(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Load(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
                .into()
            })
    }

    /// Look up a model by configuration key, falling back to a match on its gateway id.
    pub fn model(&self, key: &str) -> Option<&ModelEntry> {
        self.models
            .get(key)
            .or_else(|| self.models.values().find(|entry| entry.id == key))
    }

    /// Identity hint for a model key, if the model is configured.
    pub fn model_info(&self, key: &str) -> Option<ModelInfo> {
        self.model(key).map(ModelEntry::info)
    }

    /// Model keys in sorted order.
    pub fn model_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.models.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Audience text for the prompt.
    ///
    /// A configured audience key resolves to its modifier; any other text is
    /// used verbatim. Blank input yields `None`.
    pub fn audience_modifier(&self, key_or_text: &str) -> Option<String> {
        let trimmed = key_or_text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(
            self.audiences
                .get(trimmed)
                .map(|entry| entry.modifier.clone())
                .unwrap_or_else(|| trimmed.to_string()),
        )
    }

    /// Validation gate threshold.
    pub fn min_notes_length(&self) -> usize {
        self.generation.min_notes_length
    }

    /// Directory for persisted state: configured, else the platform data directory.
    pub fn storage_directory(&self) -> PathBuf {
        self.storage
            .directory
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("podium")))
            .unwrap_or_else(|| PathBuf::from(".podium"))
    }

    /// Resolve a model into the snapshot one gateway call needs, reading the API key
    /// from the process environment.
    ///
    /// # Errors
    ///
    /// Fails if the model is unknown, the auth scheme is unrecognized, the key is
    /// unset, or any resolved value is out of range.
    pub fn resolve(&self, model_key: Option<&str>) -> PodiumResult<AiConfiguration> {
        self.resolve_with(model_key, |name| std::env::var(name).ok())
    }

    /// [`resolve`](Self::resolve) with an explicit environment lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use podium_config::PodiumConfig;
    ///
    /// let config = PodiumConfig::bundled().unwrap();
    /// let ai = config
    ///     .resolve_with(Some("gpt-4o"), |_| Some("sk-test".to_string()))
    ///     .unwrap();
    /// assert_eq!(ai.model(), "gpt-4o");
    /// assert_eq!(ai.api_key().expose(), "sk-test");
    /// ```
    #[instrument(skip(self, lookup))]
    pub fn resolve_with<F>(&self, model_key: Option<&str>, lookup: F) -> PodiumResult<AiConfiguration>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = model_key.unwrap_or(&self.generation.default_model);
        let entry = self
            .model(key)
            .ok_or_else(|| ConfigError::new(ConfigErrorKind::UnknownModel(key.to_string())))?;

        let auth_type = AuthType::from_str(&self.gateway.auth).map_err(|_| {
            ConfigError::new(ConfigErrorKind::UnknownAuthType(self.gateway.auth.clone()))
        })?;

        let api_key = lookup(&self.gateway.api_key_env)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::new(ConfigErrorKind::MissingApiKey(
                    self.gateway.api_key_env.clone(),
                ))
            })?;

        let ai = AiConfiguration::builder()
            .gateway_url(self.gateway.url.as_str())
            .endpoint(self.gateway.endpoint.as_str())
            .auth_type(auth_type)
            .api_key(api_key.trim())
            .model(entry.id.as_str())
            .temperature(entry.temperature.unwrap_or(self.generation.temperature))
            .max_tokens(entry.max_tokens.unwrap_or(self.generation.max_tokens))
            .timeout_ms(self.generation.timeout_ms)
            .build()
            .map_err(|e| ConfigError::invalid("ai_configuration", e.to_string()))?;

        ai.validate()?;
        debug!(model = %ai.model(), url = %ai.url(), auth = %auth_type, "Resolved AI configuration");
        Ok(ai)
    }
}
