//! Best-effort client for the analytics collector.

use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Measured facts about one successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSavings {
    /// Model identifier used
    pub model: String,
    /// Slides in the accepted outline
    pub slide_count: usize,
    /// Wall-clock time of the attempt
    pub elapsed_ms: u64,
    /// Trimmed character count of the notes
    pub notes_length: usize,
}

/// Longest a single event may take, including reading the reply.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Deserialize)]
struct Ack {
    #[serde(default)]
    id: Option<i64>,
}

/// Posts usage events to the collector.
///
/// Every failure is logged and swallowed: analytics never blocks the user.
/// A disabled client does nothing.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    client: Client,
    base_url: String,
    session_id: String,
    enabled: bool,
    timeout: Duration,
}

impl AnalyticsClient {
    /// Creates a client with a fresh session id.
    pub fn new(base_url: impl Into<String>, enabled: bool) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            session_id: uuid::Uuid::new_v4().to_string(),
            enabled,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Give up on an event after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// A client that never sends anything.
    pub fn disabled() -> Self {
        Self::new(String::new(), false)
    }

    /// Whether events are sent.
    pub fn is_enabled(&self) -> bool {
        self.enabled && !self.base_url.is_empty()
    }

    /// Session id attached to every event.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Record a named event. `properties` fields are merged into the flat body.
    ///
    /// Returns the collector's row id when the event was stored.
    #[instrument(skip(self, properties), fields(session = %self.session_id))]
    pub async fn track(&self, event: &str, properties: Value) -> Option<i64> {
        let mut body = Map::new();
        if let Value::Object(fields) = properties {
            body.extend(fields);
        }
        body.insert("event".to_string(), json!(event));
        self.post("api/analytics", body).await
    }

    /// Record the measured outcome of a generation.
    #[instrument(skip(self, savings), fields(session = %self.session_id, slides = savings.slide_count))]
    pub async fn record_time_savings(&self, savings: &TimeSavings) -> Option<i64> {
        let body = match serde_json::to_value(savings) {
            Ok(Value::Object(fields)) => fields,
            _ => return None,
        };
        self.post("api/time-savings", body).await
    }

    async fn post(&self, path: &str, mut body: Map<String, Value>) -> Option<i64> {
        if !self.is_enabled() {
            return None;
        }

        body.insert("session_id".to_string(), json!(self.session_id));
        body.insert("timestamp".to_string(), json!(Utc::now().to_rfc3339()));

        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = match self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, error = %e, "Analytics collector unreachable");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(url = %url, status = %response.status(), "Analytics collector rejected event");
            return None;
        }

        match response.json::<Ack>().await {
            Ok(ack) => {
                debug!(url = %url, id = ?ack.id, "Analytics event stored");
                ack.id
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Unexpected analytics response");
                None
            }
        }
    }
}
