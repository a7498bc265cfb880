//! Test utilities for pipeline tests.
//!
//! This module provides a scripted gateway and request helpers.

#![allow(dead_code)]

pub mod mock_gateway;

pub use mock_gateway::{MockGateway, MockResponse};

use podium_core::AiConfiguration;

/// Notes comfortably past the 100 character gate.
pub fn notes(len: usize) -> String {
    let sentence = "Our team shipped the new billing system this quarter. ";
    sentence.chars().cycle().take(len).collect()
}

/// Configuration pointing nowhere; only the mock gateway sees it.
pub fn test_config() -> AiConfiguration {
    AiConfiguration::builder()
        .gateway_url("http://gateway.test")
        .api_key("test-key")
        .model("test-model")
        .temperature(0.3)
        .max_tokens(2048u32)
        .build()
        .expect("Failed to build test configuration")
}
