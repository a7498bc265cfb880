//! Tests for prompt construction and the notes gate.

mod test_utils;

use podium_core::ModelInfo;
use podium_error::ValidationErrorKind;
use podium_pipeline::{build_prompt, validate_notes};
use test_utils::notes;

#[test]
fn test_prompt_sections_in_order() {
    let notes = notes(150);
    let info = ModelInfo::new("GPT-4o", "OpenAI", "premium");
    let prompt = build_prompt(&notes, Some("Executives who want the bottom line"), Some(&info));

    let schema = prompt.find("\"slides\"").expect("schema present");
    let audience = prompt.find("Executives who want").expect("audience present");
    let model = prompt.find("You are GPT-4o by OpenAI (premium tier)").expect("model hint present");
    let body = prompt.find(&notes).expect("notes present verbatim");
    let closing = prompt.find("Return only the JSON object").expect("closing present");

    assert!(schema < audience);
    assert!(audience < model);
    assert!(model < body);
    assert!(body < closing);
}

#[test]
fn test_prompt_is_deterministic() {
    let notes = notes(200);
    let info = ModelInfo::new("Claude", "Anthropic", "balanced");

    let first = build_prompt(&notes, Some("Students"), Some(&info));
    let second = build_prompt(&notes, Some("Students"), Some(&info));

    assert_eq!(first, second);
}

#[test]
fn test_prompt_without_hints() {
    let prompt = build_prompt("Plain notes", None, None);

    assert!(!prompt.contains("Audience:"));
    assert!(!prompt.contains(" tier)"));
    assert!(prompt.contains("Plain notes"));
}

#[test]
fn test_blank_audience_is_omitted() {
    let prompt = build_prompt("Plain notes", Some("   "), None);
    assert!(!prompt.contains("Audience:"));
}

#[test]
fn test_notes_kept_verbatim() {
    let notes = "  Line one\n\n\tLine two with \"quotes\" and ünïcode  ";
    let prompt = build_prompt(notes, None, None);
    assert!(prompt.contains(notes));
}

#[test]
fn test_short_notes_rejected() {
    let err = validate_notes("Too short", 100).unwrap_err();
    assert_eq!(
        err.kind,
        ValidationErrorKind::NotesTooShort {
            minimum: 100,
            actual: 9
        }
    );
}

#[test]
fn test_notes_gate_counts_trimmed_characters() {
    let padded = format!("   {}   ", "x".repeat(99));
    assert!(validate_notes(&padded, 100).is_err());

    let exact = "é".repeat(100);
    assert!(validate_notes(&exact, 100).is_ok());
}
