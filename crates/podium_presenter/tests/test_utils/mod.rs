//! Test utilities for presenter tests.

#![allow(dead_code)]

use async_trait::async_trait;
use podium_core::{AiConfiguration, CancellationToken, Outline, RawResponse};
use podium_error::{GatewayError, GatewayErrorKind, PodiumResult};
use podium_interface::{ExtractedSlide, Gateway, PresentationRenderer, ServiceStatus};
use podium_pipeline::{GenerationRequest, OutlineGenerator};
use podium_storage::{MemoryStore, OutlineStore};
use std::sync::{Arc, Mutex};

/// Gateway returning fixed content, or a 503 when `content` is `None`.
#[derive(Debug)]
pub struct FixedGateway {
    pub content: Option<String>,
}

#[async_trait]
impl Gateway for FixedGateway {
    async fn send(
        &self,
        _config: &AiConfiguration,
        _prompt: &str,
        _cancel: &CancellationToken,
    ) -> PodiumResult<RawResponse> {
        match &self.content {
            Some(content) => Ok(RawResponse::new(content.clone())),
            None => Err(GatewayError::new(GatewayErrorKind::Status {
                status: 503,
                status_text: "Service Unavailable".to_string(),
                body: String::new(),
            })
            .into()),
        }
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Generator over a [`FixedGateway`].
pub fn generator(content: Option<&str>) -> OutlineGenerator {
    let config = AiConfiguration::builder()
        .gateway_url("http://gateway.test")
        .api_key("test-key")
        .model("test-model")
        .build()
        .expect("Failed to build test configuration");
    let gateway = FixedGateway {
        content: content.map(str::to_string),
    };
    OutlineGenerator::new(Arc::new(gateway), config, 100)
}

/// A request that passes the notes gate.
pub fn request() -> GenerationRequest {
    GenerationRequest::builder()
        .notes("We migrated every customer to the new billing platform. ".repeat(3))
        .build()
        .expect("Failed to build request")
}

/// Fresh in-memory outline store.
pub fn memory_store() -> OutlineStore {
    OutlineStore::new(Arc::new(MemoryStore::new()))
}

/// Render service double that records what it was sent.
#[derive(Debug, Default)]
pub struct FakeRenderer {
    pub extracted: Vec<ExtractedSlide>,
    pub rendered: Mutex<Vec<(Outline, Option<Vec<u8>>, String)>>,
}

impl FakeRenderer {
    pub fn with_slides(extracted: Vec<ExtractedSlide>) -> Self {
        Self {
            extracted,
            rendered: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PresentationRenderer for FakeRenderer {
    async fn status(&self) -> PodiumResult<ServiceStatus> {
        Ok(ServiceStatus {
            status: "ok".to_string(),
        })
    }

    async fn render(
        &self,
        outline: &Outline,
        template: Option<&[u8]>,
        file_name: &str,
    ) -> PodiumResult<Vec<u8>> {
        self.rendered.lock().unwrap().push((
            outline.clone(),
            template.map(<[u8]>::to_vec),
            file_name.to_string(),
        ));
        Ok(b"PK\x03\x04pptx".to_vec())
    }

    async fn extract(&self, _file: &[u8]) -> PodiumResult<Vec<ExtractedSlide>> {
        Ok(self.extracted.clone())
    }
}
