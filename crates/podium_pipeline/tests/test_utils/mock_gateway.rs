//! Scripted gateway double.

use async_trait::async_trait;
use podium_core::{AiConfiguration, CancellationToken, RawResponse};
use podium_error::{CancelledError, GatewayError, GatewayErrorKind, PodiumResult, TimeoutError};
use podium_interface::Gateway;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// One scripted gateway outcome.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this content immediately
    Content(String),
    /// Return this content after a delay, unless cancelled first
    Delayed(Duration, String),
    /// Fail with an HTTP status
    Status(u16),
    /// Fail with a timeout
    Timeout,
}

/// Gateway that replays scripted responses in order.
///
/// When `honor_cancel` is false the mock ignores the token, modelling a
/// network call that cannot be aborted and completes anyway.
#[derive(Debug)]
pub struct MockGateway {
    script: Mutex<VecDeque<MockResponse>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
    honor_cancel: bool,
}

impl MockGateway {
    /// Gateway replaying `script`.
    pub fn new(script: Vec<MockResponse>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            honor_cancel: true,
        }
    }

    /// Gateway that always answers with `content`.
    pub fn new_success(content: impl Into<String>) -> Self {
        Self::new(vec![MockResponse::Content(content.into())])
    }

    /// Ignore cancellation tokens.
    pub fn ignoring_cancel(mut self) -> Self {
        self.honor_cancel = false;
        self
    }

    /// Number of `send` calls.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn next(&self) -> MockResponse {
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            script.pop_front().unwrap()
        } else {
            script
                .front()
                .cloned()
                .unwrap_or(MockResponse::Status(500))
        }
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn send(
        &self,
        config: &AiConfiguration,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> PodiumResult<RawResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        match self.next() {
            MockResponse::Content(content) => Ok(RawResponse::new(content)),
            MockResponse::Delayed(delay, content) => {
                if self.honor_cancel {
                    tokio::select! {
                        _ = cancel.cancelled() => Err(CancelledError::new("mock cancelled").into()),
                        _ = tokio::time::sleep(delay) => Ok(RawResponse::new(content)),
                    }
                } else {
                    tokio::time::sleep(delay).await;
                    Ok(RawResponse::new(content))
                }
            }
            MockResponse::Status(status) => Err(GatewayError::new(GatewayErrorKind::Status {
                status,
                status_text: "Mock".to_string(),
                body: String::new(),
            })
            .into()),
            MockResponse::Timeout => Err(TimeoutError::new(*config.timeout_ms()).into()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
