//! Test utilities for gateway client tests.
//!
//! Each test stands up an in-process axum server on an ephemeral port.

#![allow(dead_code)]

use axum::Router;
use axum::http::HeaderMap;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// Serve `router` on 127.0.0.1 and return its base URL.
pub async fn serve(router: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(format!("http://{}", addr))
}

/// Requests seen by a test server.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<(HeaderMap, Value)>>>,
}

impl Recorder {
    /// Record one request.
    pub fn record(&self, headers: HeaderMap, body: Value) {
        self.requests.lock().unwrap().push((headers, body));
    }

    /// Number of requests seen.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The most recent request.
    pub fn last(&self) -> Option<(HeaderMap, Value)> {
        self.requests.lock().unwrap().last().cloned()
    }
}

/// A successful chat completion whose first choice carries `content`.
pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 34, "total_tokens": 46}
    })
}
