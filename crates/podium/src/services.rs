//! Process-wide service handles.

use derive_getters::Getters;
use podium_config::PodiumConfig;
use podium_core::AiConfiguration;
use podium_error::{ConfigError, PodiumResult};
use podium_gateway::{AnalyticsClient, GatewayClient, RenderServiceClient};
use podium_interface::{Gateway, KeyValueStore, PresentationRenderer};
use podium_pipeline::{GenerationRequest, OutlineGenerator};
use podium_presenter::Presenter;
use podium_storage::{FileSystemStore, OutlineStore};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Handles to every collaborator, built once at startup and passed down.
#[derive(Clone, Getters)]
pub struct Services {
    /// Loaded configuration
    config: PodiumConfig,
    /// AI gateway
    gateway: Arc<dyn Gateway>,
    /// Persisted outline
    store: OutlineStore,
    /// Render service
    renderer: Arc<dyn PresentationRenderer>,
    /// Usage events
    analytics: AnalyticsClient,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("gateway", &self.gateway.name())
            .field("store", &self.store)
            .field("analytics", &self.analytics.is_enabled())
            .finish()
    }
}

impl Services {
    /// Assemble services from explicit parts.
    pub fn new(
        config: PodiumConfig,
        gateway: Arc<dyn Gateway>,
        backend: Arc<dyn KeyValueStore>,
        renderer: Arc<dyn PresentationRenderer>,
        analytics: AnalyticsClient,
    ) -> Self {
        Self {
            config,
            gateway,
            store: OutlineStore::new(backend),
            renderer,
            analytics,
        }
    }

    /// Production wiring: HTTP clients and a filesystem store in the
    /// configured storage directory.
    ///
    /// # Errors
    ///
    /// Fails if the storage directory cannot be created.
    #[instrument(skip(config))]
    pub fn from_config(config: PodiumConfig) -> PodiumResult<Self> {
        let directory = config.storage_directory();
        debug!(storage = %directory.display(), "Wiring services");

        let backend = Arc::new(FileSystemStore::new(directory)?);
        let renderer = Arc::new(RenderServiceClient::new(config.render.url.as_str()));
        let analytics = AnalyticsClient::new(config.analytics.url.as_str(), config.analytics.enabled);

        Ok(Self::new(
            config,
            Arc::new(GatewayClient::new()),
            backend,
            renderer,
            analytics,
        ))
    }

    /// Presenter restored from the persisted outline.
    pub async fn presenter(&self) -> Presenter {
        Presenter::restore(self.store.clone()).await
    }

    /// Generator for `model` (or the default model), with the API key read
    /// from the environment.
    ///
    /// # Errors
    ///
    /// Configuration errors from resolving the model.
    pub fn generator(&self, model: Option<&str>) -> PodiumResult<OutlineGenerator> {
        Ok(self.generator_with(self.config.resolve(model)?))
    }

    /// Generator using an already resolved configuration.
    pub fn generator_with(&self, ai: AiConfiguration) -> OutlineGenerator {
        OutlineGenerator::new(self.gateway.clone(), ai, self.config.min_notes_length())
    }

    /// Build a generation request, expanding audience keys and attaching the
    /// model's identity hint.
    ///
    /// # Errors
    ///
    /// Fails only if the request cannot be assembled.
    pub fn request(
        &self,
        notes: impl Into<String>,
        audience: Option<&str>,
        model: Option<&str>,
    ) -> PodiumResult<GenerationRequest> {
        let model = model.unwrap_or(&self.config.generation.default_model);

        let mut builder = GenerationRequest::builder();
        builder.notes(notes);
        if let Some(modifier) = audience.and_then(|a| self.config.audience_modifier(a)) {
            builder.audience(modifier);
        }
        if let Some(info) = self.config.model_info(model) {
            builder.model_info(info);
        }

        builder
            .build()
            .map_err(|e| ConfigError::invalid("generation_request", e.to_string()).into())
    }
}
