//! Outline inspection, editing, and file exchange handlers.

use crate::cli::EditArgs;
use anyhow::{Context, Result, bail};
use podium::{ExportedFile, Services, SlideEdit, SlideType};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::instrument;

const NO_OUTLINE: &str = "No outline yet. Run `podium generate` or `podium import` first.";

async fn write_file(directory: &Path, file: &ExportedFile) -> Result<PathBuf> {
    tokio::fs::create_dir_all(directory)
        .await
        .with_context(|| format!("Failed to create {}", directory.display()))?;

    let path = directory.join(&file.file_name);
    tokio::fs::write(&path, &file.bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Print the current outline.
pub async fn show(services: &Services) -> Result<()> {
    let presenter = services.presenter().await;
    match presenter.view() {
        Some(view) => println!("{}", view),
        None => println!("{}", NO_OUTLINE),
    }
    Ok(())
}

fn edits_from(args: EditArgs) -> Vec<SlideEdit> {
    let mut edits = Vec::new();

    if let Some(title) = args.title {
        edits.push(SlideEdit::Title(title));
    }
    if args.clear_bullets {
        edits.push(SlideEdit::Bullets(Vec::new()));
    } else if !args.bullets.is_empty() {
        edits.push(SlideEdit::Bullets(args.bullets));
    }
    if args.clear_content {
        edits.push(SlideEdit::Content(Vec::new()));
    } else if !args.content.is_empty() {
        edits.push(SlideEdit::Content(args.content));
    }
    if args.clear_notes {
        edits.push(SlideEdit::PresenterNotes(None));
    } else if let Some(notes) = args.notes {
        edits.push(SlideEdit::PresenterNotes(Some(notes)));
    }
    if let Some(slide_type) = args.slide_type {
        edits.push(SlideEdit::SlideType(Some(SlideType::from(slide_type))));
    }

    edits
}

/// Apply the requested changes to one slide and save them.
///
/// Either every change is saved or none is.
#[instrument(skip(services, args), fields(slide = args.slide))]
pub async fn edit(services: &Services, args: EditArgs) -> Result<()> {
    let number = args.slide;
    let edits = edits_from(args);
    if edits.is_empty() {
        bail!("Nothing to change. Pass --title, --bullet, --content, --notes, or --type.");
    }

    let mut presenter = services.presenter().await;
    presenter.begin_edit(number)?;

    for change in edits {
        if let Err(e) = presenter.apply(change) {
            presenter.cancel_edit()?;
            return Err(e.into());
        }
    }

    let outline = presenter.save_edit().await?;
    if let Some(slide) = outline.slide(number) {
        println!("Saved slide {}: {}", number, slide.title);
    }
    Ok(())
}

/// Drop the current outline.
pub async fn clear(services: &Services) -> Result<()> {
    let mut presenter = services.presenter().await;
    presenter.clear().await?;
    println!("Cleared outline.");
    Ok(())
}

/// Write the outline as `outline-YYYYMMDD-HHMMSS.json` into `directory`.
#[instrument(skip(services))]
pub async fn export(services: &Services, directory: &Path) -> Result<()> {
    let presenter = services.presenter().await;
    let file = presenter.export()?;
    let path = write_file(directory, &file).await?;
    println!("Exported outline to {}", path.display());

    let slides = presenter.outline().map(|o| o.len()).unwrap_or_default();
    services
        .analytics()
        .track("outline_exported", json!({"slides": slides}))
        .await;
    Ok(())
}

/// Replace the outline with a JSON export.
#[instrument(skip(services))]
pub async fn import_json(services: &Services, path: &Path) -> Result<()> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut presenter = services.presenter().await;
    let outline = presenter.import_json(&text).await?;
    println!("{}", podium::OutlineView(outline));

    services
        .analytics()
        .track("outline_imported", json!({"slides": outline.len(), "source": "json"}))
        .await;
    Ok(())
}

/// Replace the outline with the slides of an existing presentation.
#[instrument(skip(services))]
pub async fn import_pptx(services: &Services, path: &Path) -> Result<()> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut presenter = services.presenter().await;
    let outline = presenter
        .import_presentation(&**services.renderer(), &bytes)
        .await?;
    println!("{}", podium::OutlineView(outline));

    services
        .analytics()
        .track("outline_imported", json!({"slides": outline.len(), "source": "pptx"}))
        .await;
    Ok(())
}

/// Render the outline to `presentation-YYYYMMDD-HHMMSS.pptx` in `directory`.
#[instrument(skip(services))]
pub async fn render(services: &Services, template: Option<&Path>, directory: &Path) -> Result<()> {
    let template = match template {
        Some(path) => Some(
            tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read template {}", path.display()))?,
        ),
        None => None,
    };

    let presenter = services.presenter().await;
    if presenter.outline().is_none() {
        bail!(NO_OUTLINE);
    }

    let file = presenter
        .render(&**services.renderer(), template.as_deref())
        .await?;
    let path = write_file(directory, &file).await?;
    println!("Rendered presentation to {}", path.display());

    services
        .analytics()
        .track(
            "presentation_rendered",
            json!({"slides": presenter.outline().map(|o| o.len()), "template": template.is_some()}),
        )
        .await;
    Ok(())
}
