//! Tests for response parsing and outline validation.

use podium_core::{EstimatedDuration, SlideType};
use podium_error::{PodiumErrorKind, ValidationErrorKind};
use podium_pipeline::{parse_and_validate, strip_code_fences, validate_outline_value};
use serde_json::json;

fn validation_kind(raw: &str) -> ValidationErrorKind {
    let err = parse_and_validate(raw).unwrap_err();
    match err.kind() {
        PodiumErrorKind::Validation(e) => e.kind.clone(),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_fenced_response_parses() {
    let raw = "```json\n{\"slides\":[{\"title\":\"Intro\",\"bullets\":[\"Hello\"]},{\"title\":\"Wrap up\"}],\"totalSlides\":2}\n```";

    let outline = parse_and_validate(raw).unwrap();

    assert_eq!(outline.len(), 2);
    assert_eq!(outline.slides[0].slide_number, 1);
    assert_eq!(outline.slides[1].slide_number, 2);
    assert_eq!(outline.slides[0].bullets.as_deref(), Some(&["Hello".to_string()][..]));
    assert_eq!(outline.total_slides, Some(2));
    assert!(outline.generation_metadata.is_none());
}

#[test]
fn test_unfenced_response_parses() {
    let outline = parse_and_validate("  {\"slides\":[{\"title\":\"Only\"}]}\n").unwrap();
    assert_eq!(outline.slides[0].title, "Only");
}

#[test]
fn test_prose_wrapped_fence() {
    assert_eq!(
        strip_code_fences("Here you go:\n```json\n{\"slides\":[]}\n```\nHope that helps!"),
        "{\"slides\":[]}"
    );
}

#[test]
fn test_unclosed_fence_runs_to_end() {
    assert_eq!(strip_code_fences("```json\n{\"a\":1}\n"), "{\"a\":1}");
}

#[test]
fn test_invalid_json_keeps_raw_text() {
    let raw = "Sure! ```json\n{not valid json\n```";

    let err = parse_and_validate(raw).unwrap_err();

    match err.kind() {
        PodiumErrorKind::Parse(e) => {
            assert_eq!(e.raw, raw);
            assert!(e.message.starts_with("The AI response was not valid JSON"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_prose_without_json_is_not_coerced() {
    let err = parse_and_validate("I could not do that, sorry.").unwrap_err();
    assert!(matches!(err.kind(), PodiumErrorKind::Parse(_)));
}

#[test]
fn test_missing_title_reported_by_position() {
    let kind = validation_kind("{\"slides\":[{\"bullets\":[\"a\"]}]}");
    assert_eq!(kind, ValidationErrorKind::MissingTitle(1));
    assert_eq!(kind.to_string(), "Slide 1 is missing a title");
}

#[test]
fn test_blank_title_rejected() {
    let kind = validation_kind("{\"slides\":[{\"title\":\"Fine\"},{\"title\":\"   \"}]}");
    assert_eq!(kind, ValidationErrorKind::MissingTitle(2));
}

#[test]
fn test_non_string_title_rejected() {
    assert_eq!(
        validation_kind("{\"slides\":[{\"title\":42}]}"),
        ValidationErrorKind::MissingTitle(1)
    );
}

#[test]
fn test_document_shape_checked_in_order() {
    assert_eq!(validation_kind("[1, 2]"), ValidationErrorKind::NotAnObject);
    assert_eq!(validation_kind("{\"title\":\"x\"}"), ValidationErrorKind::MissingSlides);
    assert_eq!(validation_kind("{\"slides\":{}}"), ValidationErrorKind::SlidesNotArray);
    assert_eq!(validation_kind("{\"slides\":[]}"), ValidationErrorKind::EmptySlides);
    assert_eq!(
        validation_kind("{\"slides\":[{\"title\":\"ok\"}, \"nope\"]}"),
        ValidationErrorKind::SlideNotObject(2)
    );
}

#[test]
fn test_first_violation_wins() {
    // Slide 1 has no title and slide 2 is not an object
    assert_eq!(
        validation_kind("{\"slides\":[{}, 7]}"),
        ValidationErrorKind::MissingTitle(1)
    );
}

#[test]
fn test_slide_numbers_defaulted_from_position() {
    let outline = validate_outline_value(json!({
        "slides": [
            {"title": "A", "slideNumber": 5},
            {"title": "B"},
            {"title": "C", "slideNumber": 0},
            {"title": "D", "slideNumber": "four"},
            {"title": "E", "slideNumber": 3.0}
        ]
    }))
    .unwrap();

    let numbers: Vec<u32> = outline.slides.iter().map(|s| s.slide_number).collect();
    assert_eq!(numbers, vec![5, 2, 3, 4, 3]);
}

#[test]
fn test_optional_fields_not_fabricated() {
    let outline = validate_outline_value(json!({"slides": [{"title": "A"}]})).unwrap();
    let slide = &outline.slides[0];

    assert!(slide.bullets.is_none());
    assert!(slide.content.is_none());
    assert!(slide.presenter_notes.is_none());
    assert!(slide.slide_type.is_none());
    assert!(outline.total_slides.is_none());
    assert!(outline.estimated_duration.is_none());
}

#[test]
fn test_extra_fields_are_accepted() {
    let outline = validate_outline_value(json!({
        "slides": [{
            "title": "Intro",
            "slideType": "opener",
            "presenterNotes": "Smile",
            "layout": "two-column"
        }],
        "estimatedDuration": "5-7 minutes",
        "theme": "dark"
    }))
    .unwrap();

    assert_eq!(
        outline.slides[0].slide_type,
        Some(SlideType::from("opener"))
    );
    assert_eq!(outline.slides[0].presenter_notes.as_deref(), Some("Smile"));
    assert_eq!(
        outline.estimated_duration,
        Some(EstimatedDuration::Text("5-7 minutes".to_string()))
    );
}

#[test]
fn test_lone_string_becomes_one_line() {
    let outline = parse_and_validate(
        r#"{"slides":[{"title":"Intro","content":"A single paragraph"},{"title":"Details","bullets":"x"}]}"#,
    )
    .unwrap();

    assert_eq!(outline.len(), 2);
    assert_eq!(
        outline.slides[0].content,
        Some(vec!["A single paragraph".to_string()])
    );
    assert_eq!(outline.slides[1].bullets, Some(vec!["x".to_string()]));
}

#[test]
fn test_ill_typed_slide_fields_are_left_absent() {
    let outline = validate_outline_value(json!({
        "slides": [{
            "title": "A",
            "bullets": {"first": "a"},
            "content": 42,
            "presenterNotes": ["not", "text"],
            "slideType": 7
        }]
    }))
    .unwrap();

    let slide = &outline.slides[0];
    assert_eq!(slide.title, "A");
    assert!(slide.bullets.is_none());
    assert!(slide.content.is_none());
    assert!(slide.presenter_notes.is_none());
    assert!(slide.slide_type.is_none());
}

#[test]
fn test_ill_typed_outline_fields_are_left_absent() {
    let outline = parse_and_validate(
        r#"{"slides":[{"title":"Intro"}],"totalSlides":"1","estimatedDuration":{"min":5},"generationMetadata":"yesterday"}"#,
    )
    .unwrap();

    assert_eq!(outline.len(), 1);
    assert!(outline.total_slides.is_none());
    assert!(outline.estimated_duration.is_none());
    assert!(outline.generation_metadata.is_none());
}

#[test]
fn test_non_string_list_entries_are_skipped() {
    let outline =
        validate_outline_value(json!({"slides": [{"title": "A", "bullets": ["one", 2, null, "three"]}]}))
            .unwrap();
    assert_eq!(
        outline.slides[0].bullets,
        Some(vec!["one".to_string(), "three".to_string()])
    );
}

#[test]
fn test_null_optional_fields_are_absent() {
    let outline = validate_outline_value(json!({
        "slides": [{"title": "A"}],
        "totalSlides": null,
        "estimatedDuration": null
    }))
    .unwrap();
    assert!(outline.total_slides.is_none());
    assert!(outline.estimated_duration.is_none());
}
