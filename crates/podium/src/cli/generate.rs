//! Outline generation command handler.

use anyhow::{Context, Result};
use podium::{OutlineView, Services, TimeSavings};
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{info, instrument};

/// Read notes from `path`, or from stdin when it is absent or `-`.
fn read_notes(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read notes from {}", path.display())),
        _ => {
            let mut notes = String::new();
            std::io::stdin()
                .read_to_string(&mut notes)
                .context("Failed to read notes from stdin")?;
            Ok(notes)
        }
    }
}

/// Generate an outline, display it, and report the measured outcome.
///
/// Ctrl-C cancels the gateway call; the previous outline stays in place.
#[instrument(skip(services, notes))]
pub async fn generate(
    services: &Services,
    notes: Option<&Path>,
    audience: Option<&str>,
    model: Option<&str>,
) -> Result<()> {
    let notes = read_notes(notes)?;
    let generator = services.generator(model)?;
    let request = services.request(notes, audience, model)?;
    let mut presenter = services.presenter().await;

    eprintln!("Generating outline with {}...", generator.config().model());
    let started = Instant::now();

    let generation = presenter.generate(&generator, &request);
    tokio::pin!(generation);

    let result = tokio::select! {
        result = &mut generation => result,
        Ok(()) = tokio::signal::ctrl_c() => {
            eprintln!("Cancelling...");
            generator.cancel();
            generation.await
        }
    };

    let outline = result?;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(slides = outline.len(), elapsed_ms, "Generation finished");
    println!("{}", OutlineView(outline));

    let savings = TimeSavings {
        model: generator.config().model().clone(),
        slide_count: outline.len(),
        elapsed_ms,
        notes_length: request.notes().trim().chars().count(),
    };
    services.analytics().record_time_savings(&savings).await;

    Ok(())
}
