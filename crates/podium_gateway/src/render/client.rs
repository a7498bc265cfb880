//! Render service HTTP client.

use crate::render::{ErrorBody, ExtractRequest, ExtractResponse, RenderRequest};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use podium_core::Outline;
use podium_error::{PodiumResult, RenderError, RenderErrorKind};
use podium_interface::{ExtractedSlide, PresentationRenderer, ServiceStatus};
use reqwest::{Client, Response};
use tracing::{debug, error, instrument};

/// Client for the service that writes and reads `.pptx` files.
///
/// Binary payloads travel base64-encoded inside JSON bodies; rendered files
/// come back as raw bytes.
#[derive(Debug, Clone)]
pub struct RenderServiceClient {
    client: Client,
    base_url: String,
}

impl RenderServiceClient {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client over an existing HTTP client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base URL of the service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn failure(response: Response) -> RenderError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        error!(status, message = %message, "Render service error");
        RenderError::new(RenderErrorKind::Status { status, message })
    }

    fn transport(e: reqwest::Error) -> RenderError {
        error!(error = ?e, "Render service request failed");
        RenderError::new(RenderErrorKind::Transport(e.to_string()))
    }
}

#[async_trait]
impl PresentationRenderer for RenderServiceClient {
    #[instrument(skip(self), fields(url = %self.base_url))]
    async fn status(&self) -> PodiumResult<ServiceStatus> {
        let response = self
            .client
            .get(self.endpoint("status"))
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await.into());
        }

        response.json::<ServiceStatus>().await.map_err(|e| {
            RenderError::new(RenderErrorKind::InvalidResponse(e.to_string())).into()
        })
    }

    #[instrument(skip(self, outline, template), fields(url = %self.base_url, slides = outline.len(), has_template = template.is_some()))]
    async fn render(
        &self,
        outline: &Outline,
        template: Option<&[u8]>,
        file_name: &str,
    ) -> PodiumResult<Vec<u8>> {
        let request = RenderRequest {
            original_file: template.map(|bytes| STANDARD.encode(bytes)),
            update_instructions: outline,
            file_name,
        };

        let response = self
            .client
            .post(self.endpoint("update-powerpoint"))
            .json(&request)
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await.into());
        }

        let bytes = response.bytes().await.map_err(Self::transport)?;
        if bytes.is_empty() {
            return Err(RenderError::new(RenderErrorKind::InvalidResponse(
                "empty presentation body".to_string(),
            ))
            .into());
        }

        debug!(bytes = bytes.len(), "Received rendered presentation");
        Ok(bytes.to_vec())
    }

    #[instrument(skip(self, file), fields(url = %self.base_url, bytes = file.len()))]
    async fn extract(&self, file: &[u8]) -> PodiumResult<Vec<ExtractedSlide>> {
        let request = ExtractRequest {
            file_data: STANDARD.encode(file),
        };

        let response = self
            .client
            .post(self.endpoint("extract-powerpoint"))
            .json(&request)
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::failure(response).await.into());
        }

        let extracted: ExtractResponse = response.json().await.map_err(|e| {
            RenderError::new(RenderErrorKind::InvalidResponse(e.to_string()))
        })?;

        debug!(slides = extracted.slides.len(), "Extracted slides");
        Ok(extracted.slides)
    }
}
