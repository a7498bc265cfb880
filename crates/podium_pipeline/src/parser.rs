//! Response parsing and outline validation.

use podium_core::{EstimatedDuration, GenerationMetadata, Outline, Slide, SlideType};
use podium_error::{ParseError, PodiumResult, ValidationError, ValidationErrorKind};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

/// Remove Markdown code fences around a JSON payload.
///
/// If the text contains a fenced block, its body is returned (an unclosed
/// fence runs to the end of the text). Otherwise the text is returned trimmed.
///
/// # Examples
///
/// ```
/// use podium_pipeline::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(strip_code_fences("Sure!\n```\n{}\n```\nEnjoy"), "{}");
/// assert_eq!(strip_code_fences("  {\"a\":1} "), "{\"a\":1}");
/// ```
pub fn strip_code_fences(raw: &str) -> &str {
    const JSON_FENCE: &str = "```json";
    const FENCE: &str = "```";

    let body_start = if let Some(start) = raw.find(JSON_FENCE) {
        Some(start + JSON_FENCE.len())
    } else {
        raw.find(FENCE).map(|start| {
            let after = start + FENCE.len();
            // Skip an optional language tag on the fence line
            raw[after..]
                .find('\n')
                .map(|n| after + n + 1)
                .unwrap_or(after)
        })
    };

    match body_start {
        Some(start) => {
            let rest = &raw[start..];
            let end = rest.find(FENCE).unwrap_or(rest.len());
            rest[..end].trim()
        }
        None => raw.trim(),
    }
}

/// Parse raw gateway text into a validated [`Outline`].
///
/// # Errors
///
/// - [`ParseError`] when the text is not JSON after fence stripping; the raw
///   text is kept on the error for diagnostics.
/// - [`ValidationError`] for the first violated outline invariant.
#[instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn parse_and_validate(raw: &str) -> PodiumResult<Outline> {
    let cleaned = strip_code_fences(raw);

    let value: Value = serde_json::from_str(cleaned).map_err(|e| {
        warn!(error = %e, "Gateway content is not valid JSON");
        ParseError::new(format!("The AI response was not valid JSON: {}", e), raw)
    })?;

    let outline = validate_outline_value(value)?;
    debug!(slides = outline.len(), "Validated outline");
    Ok(outline)
}

/// Validate a JSON document against the outline schema and convert it.
///
/// Checks run in order and stop at the first failure: the document is an
/// object, `slides` is present, is an array, is non-empty, and each slide is
/// an object with a non-empty `title`. A slide without a positive integer
/// `slideNumber` gets its 1-based position.
///
/// Optional fields never fail the outline. A lone string in `content` or
/// `bullets` becomes a one-line list; any other ill-typed optional field is
/// left absent.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the violated invariant.
///
/// # Examples
///
/// ```
/// use podium_pipeline::validate_outline_value;
/// use serde_json::json;
///
/// let err = validate_outline_value(json!({"slides": [{"bullets": ["a"]}]})).unwrap_err();
/// assert_eq!(err.kind.to_string(), "Slide 1 is missing a title");
///
/// let outline = validate_outline_value(json!({"slides": [{"title": "A", "content": "One line"}]})).unwrap();
/// assert_eq!(outline.slides[0].content, Some(vec!["One line".to_string()]));
/// ```
pub fn validate_outline_value(value: Value) -> Result<Outline, ValidationError> {
    let Value::Object(document) = value else {
        return Err(ValidationError::new(ValidationErrorKind::NotAnObject));
    };

    let slides = match document.get("slides") {
        None => return Err(ValidationError::new(ValidationErrorKind::MissingSlides)),
        Some(Value::Array(slides)) => slides,
        Some(_) => return Err(ValidationError::new(ValidationErrorKind::SlidesNotArray)),
    };

    if slides.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptySlides));
    }

    let slides = slides
        .iter()
        .enumerate()
        .map(|(index, slide)| validate_slide(index + 1, slide))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Outline {
        slides,
        total_slides: optional_field(&document, "totalSlides"),
        estimated_duration: optional_field::<EstimatedDuration>(&document, "estimatedDuration"),
        generation_metadata: optional_field::<GenerationMetadata>(&document, "generationMetadata"),
    })
}

fn validate_slide(position: usize, value: &Value) -> Result<Slide, ValidationError> {
    let Value::Object(fields) = value else {
        return Err(ValidationError::new(ValidationErrorKind::SlideNotObject(position)));
    };

    let title = fields
        .get("title")
        .and_then(Value::as_str)
        .filter(|title| !title.trim().is_empty())
        .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingTitle(position)))?;

    let number = slide_number(fields).unwrap_or(position as u32);
    let mut slide = Slide::new(number, title);
    slide.content = text_lines(position, fields, "content");
    slide.bullets = text_lines(position, fields, "bullets");
    slide.presenter_notes = optional_text(position, fields, "presenterNotes").map(str::to_string);
    slide.slide_type = optional_text(position, fields, "slideType").map(SlideType::from);
    Ok(slide)
}

/// A usable `slideNumber`: a positive integer that fits in `u32`.
fn slide_number(slide: &Map<String, Value>) -> Option<u32> {
    let number = slide.get("slideNumber")?;
    let whole = match number.as_u64() {
        Some(n) => n,
        None => {
            let float = number.as_f64()?;
            if float.fract() != 0.0 || float < 1.0 || float > f64::from(u32::MAX) {
                return None;
            }
            float as u64
        }
    };
    u32::try_from(whole).ok().filter(|n| *n > 0)
}

/// A list of lines, accepting a lone string as one line.
///
/// Non-string entries in a list are skipped.
fn text_lines(position: usize, slide: &Map<String, Value>, field: &str) -> Option<Vec<String>> {
    match slide.get(field)? {
        Value::Null => None,
        Value::String(line) => Some(vec![line.clone()]),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        ),
        other => {
            debug!(slide = position, field, value = %other, "Ignoring ill-typed slide field");
            None
        }
    }
}

fn optional_text<'a>(position: usize, slide: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    match slide.get(field)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => {
            debug!(slide = position, field, value = %other, "Ignoring ill-typed slide field");
            None
        }
    }
}

fn optional_field<T: DeserializeOwned>(document: &Map<String, Value>, field: &str) -> Option<T> {
    match document.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!(field, error = %e, "Ignoring ill-typed outline field");
                None
            }
        },
    }
}
