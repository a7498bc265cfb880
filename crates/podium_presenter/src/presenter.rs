//! The outline presenter state machine.

use crate::file::now_named;
use crate::{EditBuffer, ExportedFile, OutlineView, PresenterMode, SlideEdit};
use podium_core::{Outline, Slide};
use podium_error::{
    PodiumResult, PresenterError, PresenterErrorKind, ValidationError, ValidationErrorKind,
};
use podium_interface::{ExtractedSlide, PresentationRenderer};
use podium_pipeline::{GenerationRequest, OutlineGenerator, validate_outline_value};
use podium_storage::OutlineStore;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Owner of the displayed outline.
///
/// Moves between [`PresenterMode`]s:
///
/// ```text
/// Empty ──generate/import──▶ Displaying ──begin_edit──▶ Editing
///   ▲                          │    ▲                     │
///   └────────── clear ─────────┘    └─ save/cancel_edit ──┘
/// ```
///
/// Every committed change (generation, import, saved edit, clear) is written
/// to the [`OutlineStore`] before the operation returns, so the outline held
/// here always equals the persisted one. Failed operations leave both untouched.
#[derive(Debug)]
pub struct Presenter {
    store: OutlineStore,
    outline: Option<Outline>,
    edit: Option<EditBuffer>,
}

impl Presenter {
    /// Presenter with nothing loaded.
    pub fn new(store: OutlineStore) -> Self {
        Self {
            store,
            outline: None,
            edit: None,
        }
    }

    /// Presenter showing whatever outline was persisted, if any.
    #[instrument(skip(store))]
    pub async fn restore(store: OutlineStore) -> Self {
        let outline = store.load().await;
        info!(restored = outline.is_some(), "Restored presenter");
        Self {
            store,
            outline,
            edit: None,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> PresenterMode {
        match (&self.outline, &self.edit) {
            (None, _) => PresenterMode::Empty,
            (Some(_), None) => PresenterMode::Displaying,
            (Some(_), Some(_)) => PresenterMode::Editing,
        }
    }

    /// The committed outline.
    pub fn outline(&self) -> Option<&Outline> {
        self.outline.as_ref()
    }

    /// The edit buffer while editing.
    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        self.edit.as_ref()
    }

    /// Store the presenter persists to.
    pub fn store(&self) -> &OutlineStore {
        &self.store
    }

    /// Text view of the committed outline.
    pub fn view(&self) -> Option<OutlineView<'_>> {
        self.outline.as_ref().map(OutlineView)
    }

    #[track_caller]
    fn require(&self, operation: &str, allowed: &[PresenterMode]) -> Result<(), PresenterError> {
        let mode = self.mode();
        if allowed.contains(&mode) {
            Ok(())
        } else {
            Err(PresenterError::invalid_state(operation, mode))
        }
    }

    #[track_caller]
    fn committed(&self, operation: &str) -> Result<&Outline, PresenterError> {
        self.outline
            .as_ref()
            .ok_or_else(|| PresenterError::invalid_state(operation, PresenterMode::Empty))
    }

    async fn commit(&mut self, outline: Outline) -> &Outline {
        self.store.save(Some(&outline)).await;
        self.edit = None;
        self.outline.insert(outline)
    }

    /// Generate a new outline and display it.
    ///
    /// On any failure, including cancellation, the previous outline stays
    /// displayed and persisted.
    ///
    /// # Errors
    ///
    /// `InvalidState` while editing, otherwise whatever the generator returns.
    #[instrument(skip_all)]
    pub async fn generate(
        &mut self,
        generator: &OutlineGenerator,
        request: &GenerationRequest,
    ) -> PodiumResult<&Outline> {
        self.require(
            "generate",
            &[PresenterMode::Empty, PresenterMode::Displaying],
        )?;

        match generator.generate(request).await {
            Ok(outline) => {
                info!(slides = outline.len(), "Displaying generated outline");
                Ok(self.commit(outline).await)
            }
            Err(e) => {
                warn!(error = %e, kept_previous = self.outline.is_some(), "Generation failed");
                Err(e)
            }
        }
    }

    /// Replace the outline with a JSON document such as a previous export.
    ///
    /// # Errors
    ///
    /// `InvalidState` while editing; `Import` if the text is not JSON or not a
    /// valid outline.
    #[instrument(skip_all, fields(bytes = text.len()))]
    pub async fn import_json(&mut self, text: &str) -> PodiumResult<&Outline> {
        self.require("import", &[PresenterMode::Empty, PresenterMode::Displaying])?;

        let value: Value = serde_json::from_str(text).map_err(|e| {
            PresenterError::new(PresenterErrorKind::Import(format!("not valid JSON: {}", e)))
        })?;
        if !value.get("slides").is_some_and(Value::is_array) {
            return Err(PresenterError::new(PresenterErrorKind::Import(
                "document must contain a 'slides' array".to_string(),
            ))
            .into());
        }

        let outline = validate_outline_value(value)
            .map_err(|e| PresenterError::new(PresenterErrorKind::Import(e.kind.to_string())))?;

        info!(slides = outline.len(), "Imported outline");
        Ok(self.commit(outline).await)
    }

    /// Replace the outline with the slides of an existing presentation file.
    ///
    /// The render service extracts the text; slides without a title are
    /// named `Slide N`.
    ///
    /// # Errors
    ///
    /// `InvalidState` while editing, render errors from the service, and
    /// `Import` if the file has no slides.
    #[instrument(skip_all, fields(bytes = file.len()))]
    pub async fn import_presentation(
        &mut self,
        renderer: &dyn PresentationRenderer,
        file: &[u8],
    ) -> PodiumResult<&Outline> {
        self.require("import", &[PresenterMode::Empty, PresenterMode::Displaying])?;

        let extracted = renderer.extract(file).await?;
        if extracted.is_empty() {
            return Err(PresenterError::new(PresenterErrorKind::Import(
                "presentation has no slides".to_string(),
            ))
            .into());
        }

        let slides = extracted
            .into_iter()
            .enumerate()
            .map(|(index, slide)| slide_from_extracted(index + 1, slide))
            .collect();

        let outline = Outline::new(slides);
        info!(slides = outline.len(), "Imported presentation");
        Ok(self.commit(outline).await)
    }

    /// Start editing slide `slide_number` (1-based).
    ///
    /// # Errors
    ///
    /// `InvalidState` unless displaying; `SlideOutOfRange` for a bad number.
    #[instrument(skip(self))]
    pub fn begin_edit(&mut self, slide_number: usize) -> Result<&Slide, PresenterError> {
        self.require("edit a slide", &[PresenterMode::Displaying])?;
        let outline = self.committed("edit a slide")?;

        let scratch = outline.slide(slide_number).cloned().ok_or_else(|| {
            PresenterError::new(PresenterErrorKind::SlideOutOfRange {
                requested: slide_number,
                available: outline.len(),
            })
        })?;

        debug!(title = %scratch.title, "Editing slide");
        let buffer = self.edit.insert(EditBuffer {
            index: slide_number - 1,
            scratch,
        });
        Ok(&buffer.scratch)
    }

    /// Apply one change to the scratch slide.
    ///
    /// # Errors
    ///
    /// `InvalidState` unless editing; `ValidationError` for a blank title.
    pub fn apply(&mut self, edit: SlideEdit) -> PodiumResult<&Slide> {
        let mode = self.mode();
        let Some(buffer) = self.edit.as_mut() else {
            return Err(PresenterError::invalid_state("apply an edit", mode).into());
        };
        let slide = &mut buffer.scratch;

        match edit {
            SlideEdit::Title(title) => {
                let title = title.trim();
                if title.is_empty() {
                    return Err(ValidationError::new(ValidationErrorKind::MissingTitle(
                        buffer.index + 1,
                    ))
                    .into());
                }
                slide.title = title.to_string();
            }
            SlideEdit::Content(lines) => slide.content = non_empty(lines),
            SlideEdit::Bullets(lines) => slide.bullets = non_empty(lines),
            SlideEdit::PresenterNotes(notes) => {
                slide.presenter_notes = notes.filter(|n| !n.trim().is_empty());
            }
            SlideEdit::SlideType(slide_type) => slide.slide_type = slide_type,
        }

        Ok(&*slide)
    }

    /// Commit the scratch slide and persist the outline.
    ///
    /// # Errors
    ///
    /// `InvalidState` unless editing.
    #[instrument(skip(self))]
    pub async fn save_edit(&mut self) -> PodiumResult<&Outline> {
        let mode = self.mode();
        let (Some(buffer), Some(outline)) = (self.edit.take(), self.outline.as_ref()) else {
            return Err(PresenterError::invalid_state("save an edit", mode).into());
        };

        let mut updated = outline.clone();
        updated.slides[buffer.index] = buffer.scratch;
        info!(slide = buffer.index + 1, "Saved slide edit");
        Ok(self.commit(updated).await)
    }

    /// Discard the scratch slide.
    ///
    /// # Errors
    ///
    /// `InvalidState` unless editing.
    pub fn cancel_edit(&mut self) -> Result<(), PresenterError> {
        self.require("cancel an edit", &[PresenterMode::Editing])?;
        self.edit = None;
        debug!("Discarded slide edit");
        Ok(())
    }

    /// Drop the outline and clear the persisted copy.
    ///
    /// # Errors
    ///
    /// `InvalidState` while editing.
    #[instrument(skip(self))]
    pub async fn clear(&mut self) -> Result<(), PresenterError> {
        self.require("clear", &[PresenterMode::Empty, PresenterMode::Displaying])?;
        self.store.save(None).await;
        self.outline = None;
        info!("Cleared outline");
        Ok(())
    }

    /// Pretty JSON of the committed outline, named `outline-YYYYMMDD-HHMMSS.json`.
    ///
    /// # Errors
    ///
    /// `InvalidState` when empty; `Export` if serialization fails.
    pub fn export(&self) -> Result<ExportedFile, PresenterError> {
        let outline = self.committed("export")?;
        let text = serde_json::to_string_pretty(outline)
            .map_err(|e| PresenterError::new(PresenterErrorKind::Export(e.to_string())))?;

        Ok(ExportedFile {
            file_name: now_named("outline", "json"),
            bytes: text.into_bytes(),
        })
    }

    /// Render the committed outline through the render service.
    ///
    /// With a `template`, the service updates that presentation instead of
    /// starting from a blank one. The file is named
    /// `presentation-YYYYMMDD-HHMMSS.pptx`.
    ///
    /// # Errors
    ///
    /// `InvalidState` when empty, otherwise render service errors.
    #[instrument(skip_all, fields(template = template.is_some()))]
    pub async fn render(
        &self,
        renderer: &dyn PresentationRenderer,
        template: Option<&[u8]>,
    ) -> PodiumResult<ExportedFile> {
        let outline = self.committed("render")?;
        let file_name = now_named("presentation", "pptx");

        let bytes = renderer.render(outline, template, &file_name).await?;
        info!(file_name = %file_name, bytes = bytes.len(), "Rendered presentation");
        Ok(ExportedFile { file_name, bytes })
    }
}

fn non_empty(lines: Vec<String>) -> Option<Vec<String>> {
    Some(lines).filter(|lines| !lines.is_empty())
}

fn slide_from_extracted(position: usize, extracted: ExtractedSlide) -> Slide {
    let number = if extracted.slide_number > 0 {
        extracted.slide_number
    } else {
        position as u32
    };
    let title = match extracted.title.trim() {
        "" => format!("Slide {}", number),
        title => title.to_string(),
    };

    let mut slide = Slide::new(number, title);
    slide.content = non_empty(
        extracted
            .content
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect(),
    );
    slide
}
