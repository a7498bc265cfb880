//! Types exchanged with the render service.

use serde::{Deserialize, Serialize};

/// Text pulled from one slide of an existing presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSlide {
    /// 1-based slide position
    pub slide_number: u32,
    /// Title placeholder text, possibly empty
    #[serde(default)]
    pub title: String,
    /// Remaining text frames in reading order
    #[serde(default)]
    pub content: Vec<String>,
}

/// Reported state of the render service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Status string, `"ok"` when healthy
    pub status: String,
}

impl ServiceStatus {
    /// True when the service reported `ok`.
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
