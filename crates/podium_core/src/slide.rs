//! Slide types.

use serde::{Deserialize, Serialize};

/// Presentation role of a slide.
///
/// Known labels are matched case-insensitively. Any other string is kept
/// verbatim in [`SlideType::Other`], whose [`SlideLabel`] can only be built
/// through `From`, so every value serializes to a string that reads back as
/// the same value.
///
/// # Examples
///
/// ```
/// use podium_core::SlideType;
///
/// assert_eq!(SlideType::from("Conclusion"), SlideType::Conclusion);
/// assert_eq!(SlideType::from("demo").to_string(), "demo");
/// assert!(matches!(SlideType::from("demo"), SlideType::Other(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(from = "String", into = "String")]
pub enum SlideType {
    /// Opening title slide
    #[display("title")]
    Title,
    /// Regular content slide
    #[display("content")]
    Content,
    /// Closing summary slide
    #[display("conclusion")]
    Conclusion,
    /// Section divider
    #[display("section")]
    Section,
    /// Agenda / overview slide
    #[display("agenda")]
    Agenda,
    /// Any other type label
    #[display("{}", _0)]
    Other(SlideLabel),
}

/// A slide type label that is not one of the known [`SlideType`] variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub struct SlideLabel(String);

impl SlideLabel {
    /// The label as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SlideType {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "title" => SlideType::Title,
            "content" => SlideType::Content,
            "conclusion" => SlideType::Conclusion,
            "section" => SlideType::Section,
            "agenda" => SlideType::Agenda,
            _ => SlideType::Other(SlideLabel(value)),
        }
    }
}

impl From<&str> for SlideType {
    fn from(value: &str) -> Self {
        SlideType::from(value.to_string())
    }
}

impl From<SlideType> for String {
    fn from(value: SlideType) -> Self {
        value.to_string()
    }
}

/// One entry of an [`Outline`](crate::Outline).
///
/// Optional fields that the gateway did not supply stay `None`; only
/// `slide_number` is ever filled in on the caller's behalf.
///
/// # Examples
///
/// ```
/// use podium_core::{Slide, SlideType};
///
/// let mut slide = Slide::new(1, "Introduction");
/// slide.bullets = Some(vec!["Why we are here".to_string()]);
/// slide.slide_type = Some(SlideType::Title);
///
/// let json = serde_json::to_value(&slide).unwrap();
/// assert_eq!(json["slideNumber"], 1);
/// assert!(json.get("presenterNotes").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// 1-based position in the outline
    pub slide_number: u32,
    /// Non-empty slide title
    pub title: String,
    /// Free-form content lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
    /// Bullet points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
    /// Speaker notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presenter_notes: Option<String>,
    /// Presentation role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_type: Option<SlideType>,
}

impl Slide {
    /// Create a slide with only a number and a title.
    pub fn new(slide_number: u32, title: impl Into<String>) -> Self {
        Self {
            slide_number,
            title: title.into(),
            content: None,
            bullets: None,
            presenter_notes: None,
            slide_type: None,
        }
    }

    /// Lines to place in the body placeholder: bullets win over content.
    pub fn body_lines(&self) -> &[String] {
        match (&self.bullets, &self.content) {
            (Some(bullets), _) if !bullets.is_empty() => bullets.as_slice(),
            (_, Some(content)) => content.as_slice(),
            _ => &[],
        }
    }
}
