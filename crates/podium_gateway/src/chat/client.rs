//! Gateway client for chat completions.

use crate::chat::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use podium_core::{AiConfiguration, CancellationToken, RawResponse};
use podium_error::{
    CancelledError, GatewayError, GatewayErrorKind, PodiumResult, TimeoutError,
};
use podium_interface::Gateway;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, error, instrument, warn};

/// Client for any gateway speaking the OpenAI chat completions format.
///
/// One call per [`send`](Gateway::send): no retry, bounded by the
/// configuration's timeout, abandoned as soon as the cancellation token fires.
///
/// # Example
///
/// ```no_run
/// use podium_core::{AiConfiguration, CancellationToken};
/// use podium_gateway::GatewayClient;
/// use podium_interface::Gateway;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AiConfiguration::builder()
///     .gateway_url("https://api.openai.com/v1")
///     .api_key("sk-...")
///     .model("gpt-4o-mini")
///     .build()?;
///
/// let client = GatewayClient::new();
/// let response = client
///     .send(&config, "Say hello", &CancellationToken::new())
///     .await?;
/// println!("{}", response.content);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GatewayClient {
    client: Client,
}

impl GatewayClient {
    /// Creates a client with a default HTTP connection pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client over an existing HTTP client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Build the single-turn request body for `prompt`.
    pub fn chat_request(config: &AiConfiguration, prompt: &str) -> PodiumResult<ChatRequest> {
        ChatRequest::builder()
            .model(config.model().as_str())
            .messages(vec![ChatMessage::user(prompt)])
            .max_tokens(*config.max_tokens())
            .temperature(*config.temperature())
            .build()
            .map_err(|e| {
                GatewayError::new(GatewayErrorKind::Transport(format!(
                    "Failed to build request: {}",
                    e
                )))
                .into()
            })
    }

    #[instrument(skip(self, config, prompt), fields(model = %config.model(), url = %config.url()))]
    async fn execute(&self, config: &AiConfiguration, prompt: &str) -> PodiumResult<RawResponse> {
        let request = Self::chat_request(config, prompt)?;
        let (header_name, header_value) = config.auth_type().header(config.api_key().expose());

        debug!(
            auth = %config.auth_type(),
            prompt_chars = prompt.chars().count(),
            max_tokens = *config.max_tokens(),
            "Sending request"
        );

        let response = self
            .client
            .post(config.url())
            .header(CONTENT_TYPE, "application/json")
            .header(header_name, header_value)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GatewayError::new(GatewayErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            GatewayError::new(GatewayErrorKind::Transport(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        if !status.is_success() {
            error!(status = %status, body = %body, "Gateway error");
            return Err(GatewayError::new(GatewayErrorKind::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            })
            .into());
        }

        let chat_response: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse response");
            GatewayError::new(GatewayErrorKind::MalformedResponse(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        let ChatResponse {
            model,
            choices,
            usage,
        } = chat_response;

        let content = choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                warn!("Response has no choices[0].message.content");
                GatewayError::new(GatewayErrorKind::MalformedResponse(
                    "missing choices[0].message.content".to_string(),
                ))
            })?;

        Ok(RawResponse {
            content,
            model,
            usage: usage.map(Into::into),
        })
    }
}

#[async_trait]
impl Gateway for GatewayClient {
    #[instrument(skip(self, config, prompt, cancel), fields(model = %config.model(), timeout_ms = *config.timeout_ms()))]
    async fn send(
        &self,
        config: &AiConfiguration,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> PodiumResult<RawResponse> {
        if cancel.is_cancelled() {
            return Err(CancelledError::new("cancelled before the gateway call").into());
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Gateway call abandoned after cancellation");
                Err(CancelledError::new("gateway call abandoned").into())
            }
            result = tokio::time::timeout(config.timeout(), self.execute(config, prompt)) => {
                match result {
                    Ok(response) => response,
                    Err(_) => {
                        warn!("Gateway call timed out");
                        Err(TimeoutError::new(*config.timeout_ms()).into())
                    }
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "openai-compatible"
    }
}
