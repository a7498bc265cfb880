//! Outline generation with at-most-one attempt in flight.

use crate::{build_prompt, parse_and_validate, validate_notes};
use chrono::Utc;
use derive_builder::Builder;
use derive_getters::Getters;
use podium_core::{AiConfiguration, CancellationToken, GenerationMetadata, ModelInfo, Outline};
use podium_error::{CancelledError, PodiumResult};
use podium_interface::Gateway;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Input for one generation attempt.
///
/// # Example
///
/// ```
/// use podium_pipeline::GenerationRequest;
///
/// let request = GenerationRequest::builder()
///     .notes("Quarterly results ...")
///     .audience("Board members")
///     .build()
///     .unwrap();
/// assert_eq!(request.audience().as_deref(), Some("Board members"));
/// assert!(request.model_info().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Getters)]
pub struct GenerationRequest {
    /// The user's raw notes
    #[builder(setter(into))]
    notes: String,
    /// Audience modifier text
    #[builder(default, setter(into, strip_option))]
    audience: Option<String>,
    /// Identity hint for the model
    #[builder(default, setter(into, strip_option))]
    model_info: Option<ModelInfo>,
}

impl GenerationRequest {
    /// Creates a new builder for `GenerationRequest`.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

#[derive(Debug)]
struct Attempt {
    id: u64,
    token: CancellationToken,
}

/// Runs the generation pipeline: gate, prompt, gateway, parse and validate.
///
/// Starting an attempt cancels whichever attempt is still live. A cancelled
/// attempt never returns an outline, even if its gateway call completed:
/// it fails with [`CancelledError`] so a newer result is never overwritten.
pub struct OutlineGenerator {
    gateway: Arc<dyn Gateway>,
    config: AiConfiguration,
    min_notes_length: usize,
    next_id: AtomicU64,
    in_flight: Mutex<Option<Attempt>>,
}

impl std::fmt::Debug for OutlineGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineGenerator")
            .field("gateway", &self.gateway.name())
            .field("config", &self.config)
            .field("min_notes_length", &self.min_notes_length)
            .finish()
    }
}

impl OutlineGenerator {
    /// Create a generator over `gateway` using the resolved `config`.
    pub fn new(gateway: Arc<dyn Gateway>, config: AiConfiguration, min_notes_length: usize) -> Self {
        Self {
            gateway,
            config,
            min_notes_length,
            next_id: AtomicU64::new(1),
            in_flight: Mutex::new(None),
        }
    }

    /// Configuration snapshot used for every call.
    pub fn config(&self) -> &AiConfiguration {
        &self.config
    }

    /// Validation gate threshold.
    pub fn min_notes_length(&self) -> usize {
        self.min_notes_length
    }

    fn slot(&self) -> MutexGuard<'_, Option<Attempt>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// True while an attempt is live.
    pub fn is_generating(&self) -> bool {
        self.slot().is_some()
    }

    /// Cancel the live attempt, if any. Returns whether one was cancelled.
    pub fn cancel(&self) -> bool {
        match self.slot().take() {
            Some(attempt) => {
                info!(attempt = attempt.id, "Cancelling generation");
                attempt.token.cancel();
                true
            }
            None => false,
        }
    }

    fn begin(&self) -> (u64, CancellationToken) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let token = CancellationToken::new();
        let previous = self.slot().replace(Attempt {
            id,
            token: token.clone(),
        });
        if let Some(previous) = previous {
            info!(superseded = previous.id, attempt = id, "Superseding live generation");
            previous.token.cancel();
        }
        (id, token)
    }

    fn finish(&self, id: u64) {
        let mut slot = self.slot();
        if slot.as_ref().is_some_and(|attempt| attempt.id == id) {
            *slot = None;
        }
    }

    /// Generate an outline for `request`.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if the notes fail the gate (no gateway call is made)
    ///   or the response violates the outline schema
    /// - `GatewayError` / `TimeoutError` from the gateway call
    /// - `ParseError` if the response is not JSON
    /// - `CancelledError` if this attempt was cancelled or superseded
    #[instrument(skip(self, request), fields(model = %self.config.model(), notes_chars = request.notes().chars().count()))]
    pub async fn generate(&self, request: &GenerationRequest) -> PodiumResult<Outline> {
        validate_notes(request.notes(), self.min_notes_length)?;

        let prompt = build_prompt(
            request.notes(),
            request.audience().as_deref(),
            request.model_info().as_ref(),
        );

        let (id, token) = self.begin();
        debug!(attempt = id, prompt_chars = prompt.chars().count(), "Starting generation");

        let result = self.gateway.send(&self.config, &prompt, &token).await;
        self.finish(id);

        if token.is_cancelled() {
            warn!(attempt = id, "Discarding result of cancelled generation");
            return Err(CancelledError::new("generation was cancelled or superseded").into());
        }

        let mut outline = parse_and_validate(&result?.content)?;
        outline.generation_metadata = Some(GenerationMetadata {
            model: self.config.model().clone(),
            temperature: *self.config.temperature(),
            max_tokens: *self.config.max_tokens(),
            timestamp: Utc::now(),
        });

        info!(attempt = id, slides = outline.len(), "Generated outline");
        Ok(outline)
    }
}
