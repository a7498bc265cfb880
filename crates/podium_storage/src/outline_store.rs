//! Persistence of the last accepted outline.

use chrono::Utc;
use podium_core::Outline;
use podium_error::{PodiumResult, StorageError, StorageErrorKind};
use podium_interface::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Fixed key the outline envelope is stored under.
pub const OUTLINE_KEY: &str = "podium.outline";

/// Envelope format version written and accepted by [`OutlineStore`].
pub const ENVELOPE_VERSION: &str = "1.0";

#[derive(Debug, Serialize)]
struct EnvelopeRef<'a> {
    outline: &'a Outline,
    timestamp: String,
    version: &'static str,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    outline: Option<Outline>,
    timestamp: String,
    version: String,
}

/// Owner of the persisted outline.
///
/// Stores `{outline, timestamp, version}` under [`OUTLINE_KEY`]. Storage
/// failures are logged and swallowed: `save` always returns, and `load`
/// degrades anything absent or unreadable to `None`.
///
/// # Example
///
/// ```
/// use podium_core::{Outline, Slide};
/// use podium_storage::{MemoryStore, OutlineStore};
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = OutlineStore::new(Arc::new(MemoryStore::new()));
/// let outline = Outline::new(vec![Slide::new(1, "Intro")]);
///
/// store.save(Some(&outline)).await;
/// assert_eq!(store.load().await, Some(outline));
///
/// store.save(None).await;
/// assert_eq!(store.load().await, None);
/// # }
/// ```
#[derive(Clone)]
pub struct OutlineStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
}

impl std::fmt::Debug for OutlineStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineStore").field("key", &self.key).finish()
    }
}

impl OutlineStore {
    /// Outline store over `backend` using the fixed key.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(backend, OUTLINE_KEY)
    }

    /// Outline store over `backend` using a custom key.
    pub fn with_key(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Key the envelope lives under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the persisted outline, or clear it with `None`.
    ///
    /// Clearing removes the key, so clearing twice leaves storage exactly as
    /// clearing once.
    #[instrument(skip(self, outline), fields(key = %self.key, slides = outline.map(Outline::len)))]
    pub async fn save(&self, outline: Option<&Outline>) {
        let result = match outline {
            Some(outline) => self.write(outline).await,
            None => self.backend.remove(&self.key).await,
        };

        match result {
            Ok(()) => debug!(cleared = outline.is_none(), "Persisted outline"),
            Err(e) => warn!(error = %e, "Failed to persist outline; continuing without it"),
        }
    }

    async fn write(&self, outline: &Outline) -> PodiumResult<()> {
        let envelope = EnvelopeRef {
            outline,
            timestamp: Utc::now().to_rfc3339(),
            version: ENVELOPE_VERSION,
        };
        let value = serde_json::to_string(&envelope)
            .map_err(|e| StorageError::new(StorageErrorKind::Encode(e.to_string())))?;
        self.backend.set(&self.key, &value).await
    }

    /// The persisted outline, if there is a readable one.
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn load(&self) -> Option<Outline> {
        let raw = match self.backend.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No persisted outline");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read persisted outline");
                return None;
            }
        };

        let envelope: Envelope = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!(error = %e, "Persisted outline is unreadable; ignoring it");
                return None;
            }
        };

        if envelope.version != ENVELOPE_VERSION {
            warn!(version = %envelope.version, "Unsupported outline envelope version; ignoring it");
            return None;
        }

        let outline = envelope.outline?;
        if outline.is_empty() || outline.slides.iter().any(|s| s.title.trim().is_empty()) {
            warn!("Persisted outline violates outline invariants; ignoring it");
            return None;
        }

        debug!(slides = outline.len(), saved_at = %envelope.timestamp, "Loaded persisted outline");
        Some(outline)
    }
}
