//! Trait definitions for the pipeline's external boundaries.

use crate::{ExtractedSlide, ServiceStatus};
use async_trait::async_trait;
use podium_core::{AiConfiguration, CancellationToken, Outline, RawResponse};
use podium_error::PodiumResult;

/// One single-turn chat completion against the AI gateway.
///
/// Implementations issue exactly one network call per `send` with no retry,
/// and must stop waiting once `cancel` fires.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Send `prompt` using the settings in `config`.
    async fn send(
        &self,
        config: &AiConfiguration,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> PodiumResult<RawResponse>;

    /// Short name for logs (e.g. "openai-compatible").
    fn name(&self) -> &'static str;
}

/// Key-value persistence with whole-value replacement.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> PodiumResult<Option<String>>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> PodiumResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> PodiumResult<()>;
}

/// External service that writes and reads binary presentation files.
#[async_trait]
pub trait PresentationRenderer: Send + Sync {
    /// Check whether the service is reachable.
    async fn status(&self) -> PodiumResult<ServiceStatus>;

    /// Render `outline` into presentation bytes, optionally on top of an existing file.
    async fn render(
        &self,
        outline: &Outline,
        template: Option<&[u8]>,
        file_name: &str,
    ) -> PodiumResult<Vec<u8>>;

    /// Extract slide titles and text from an existing presentation file.
    async fn extract(&self, file: &[u8]) -> PodiumResult<Vec<ExtractedSlide>>;
}
