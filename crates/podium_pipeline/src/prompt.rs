//! Prompt construction and the notes validation gate.

use podium_core::ModelInfo;
use podium_error::{ValidationError, ValidationErrorKind};

const INSTRUCTIONS: &str = r#"You are an expert presentation designer. Turn the speaker notes below into a clear, well-structured slide outline.

Respond with a single JSON object and nothing else. Use exactly this schema:

{
  "slides": [
    {
      "slideNumber": 1,
      "title": "Slide title (required, never empty)",
      "bullets": ["Short bullet point", "Another bullet point"],
      "content": ["Optional longer line of body text"],
      "presenterNotes": "What the speaker should say on this slide",
      "slideType": "title | agenda | section | content | conclusion"
    }
  ],
  "totalSlides": 1,
  "estimatedDuration": "10 minutes"
}

Guidelines:
- Start with a title slide and end with a conclusion slide.
- Keep bullets under 12 words; use 3 to 5 bullets per content slide.
- Put detail in presenterNotes rather than on the slide.
- Number slides from 1 in order."#;

const CLOSING: &str =
    "Return only the JSON object described above. Do not wrap it in prose or explanations.";

/// Validation gate: reject notes shorter than `min_len` characters after trimming.
///
/// Runs before [`build_prompt`], which does not re-validate.
///
/// # Errors
///
/// Returns [`ValidationErrorKind::NotesTooShort`] when the notes are too short.
///
/// # Examples
///
/// ```
/// use podium_pipeline::validate_notes;
///
/// assert!(validate_notes("too short", 100).is_err());
/// assert!(validate_notes(&"x".repeat(100), 100).is_ok());
/// ```
#[track_caller]
pub fn validate_notes(notes: &str, min_len: usize) -> Result<(), ValidationError> {
    let actual = notes.trim().chars().count();
    if actual < min_len {
        return Err(ValidationError::new(ValidationErrorKind::NotesTooShort {
            minimum: min_len,
            actual,
        }));
    }
    Ok(())
}

/// Build the generation prompt.
///
/// Sections appear in a fixed order: instructions, audience modifier (if any),
/// model identity hint (if any), the notes verbatim, closing instruction.
/// The result depends only on the inputs.
///
/// # Examples
///
/// ```
/// use podium_core::ModelInfo;
/// use podium_pipeline::build_prompt;
///
/// let info = ModelInfo::new("GPT-4o", "OpenAI", "premium");
/// let prompt = build_prompt("My notes", Some("Executives"), Some(&info));
///
/// let audience = prompt.find("Executives").unwrap();
/// let model = prompt.find("GPT-4o").unwrap();
/// let notes = prompt.find("My notes").unwrap();
/// assert!(audience < model && model < notes);
/// ```
pub fn build_prompt(notes: &str, audience: Option<&str>, model: Option<&ModelInfo>) -> String {
    let mut prompt = String::with_capacity(INSTRUCTIONS.len() + notes.len() + 512);
    prompt.push_str(INSTRUCTIONS);

    if let Some(audience) = audience.map(str::trim).filter(|a| !a.is_empty()) {
        prompt.push_str("\n\nAudience:\n");
        prompt.push_str(audience);
    }

    if let Some(model) = model {
        prompt.push_str(&format!(
            "\n\nYou are {} by {} ({} tier). Use your strengths to produce the best outline you can.",
            model.name, model.provider, model.quality
        ));
    }

    prompt.push_str("\n\nSpeaker notes:\n\"\"\"\n");
    prompt.push_str(notes);
    prompt.push_str("\n\"\"\"\n\n");
    prompt.push_str(CLOSING);
    prompt
}
