//! Outline types.

use crate::Slide;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estimated speaking time, as the gateway chose to express it.
///
/// # Examples
///
/// ```
/// use podium_core::EstimatedDuration;
///
/// let text: EstimatedDuration = serde_json::from_str("\"3 minutes\"").unwrap();
/// assert_eq!(text, EstimatedDuration::Text("3 minutes".to_string()));
///
/// let minutes: EstimatedDuration = serde_json::from_str("12").unwrap();
/// assert_eq!(minutes.to_string(), "12 minutes");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::Display)]
#[serde(untagged)]
pub enum EstimatedDuration {
    /// Numeric minutes
    #[display("{} minutes", _0)]
    Minutes(f64),
    /// Free text such as "10-15 minutes"
    #[display("{}", _0)]
    Text(String),
}

/// How an outline was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    /// Model identifier sent to the gateway
    pub model: String,
    /// Sampling temperature used
    pub temperature: f32,
    /// Token ceiling used
    pub max_tokens: u32,
    /// When the outline was accepted
    pub timestamp: DateTime<Utc>,
}

/// The structured slide plan produced by the generation pipeline.
///
/// A validated outline always has at least one slide, every slide has a
/// non-empty title, and slide numbers are positive.
///
/// # Examples
///
/// ```
/// use podium_core::{Outline, Slide};
///
/// let outline = Outline::new(vec![Slide::new(1, "Intro"), Slide::new(2, "Details")]);
/// assert_eq!(outline.len(), 2);
/// assert_eq!(outline.slide(2).map(|s| s.title.as_str()), Some("Details"));
///
/// let json = serde_json::to_value(&outline).unwrap();
/// assert!(json.get("totalSlides").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    /// Ordered slides
    pub slides: Vec<Slide>,
    /// Slide count as reported by the gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_slides: Option<u32>,
    /// Speaking time estimate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<EstimatedDuration>,
    /// Provenance of a generated outline; absent on imports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_metadata: Option<GenerationMetadata>,
}

impl Outline {
    /// Create an outline holding only slides.
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            total_slides: None,
            estimated_duration: None,
            generation_metadata: None,
        }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True when the outline has no slides (never the case once validated).
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Look up a slide by its 1-based position.
    pub fn slide(&self, number: usize) -> Option<&Slide> {
        number.checked_sub(1).and_then(|index| self.slides.get(index))
    }
}
