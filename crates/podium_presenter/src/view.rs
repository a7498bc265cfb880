//! Plain-text rendering of an outline.

use podium_core::Outline;
use std::fmt;

/// Display adapter that lays an outline out for a terminal.
///
/// ```text
/// Outline: 2 slides, 10 minutes
///
/// 1. Welcome [title]
///    - Why we are here
///    Notes: Smile and introduce the team
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OutlineView<'a>(pub &'a Outline);

impl fmt::Display for OutlineView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outline = self.0;
        let noun = if outline.len() == 1 { "slide" } else { "slides" };
        write!(f, "Outline: {} {}", outline.len(), noun)?;
        if let Some(duration) = &outline.estimated_duration {
            write!(f, ", {}", duration)?;
        }
        writeln!(f)?;

        for slide in &outline.slides {
            writeln!(f)?;
            write!(f, "{}. {}", slide.slide_number, slide.title)?;
            if let Some(slide_type) = &slide.slide_type {
                write!(f, " [{}]", slide_type)?;
            }
            writeln!(f)?;

            for bullet in slide.bullets.iter().flatten() {
                writeln!(f, "   - {}", bullet)?;
            }
            for line in slide.content.iter().flatten() {
                writeln!(f, "   {}", line)?;
            }
            if let Some(notes) = &slide.presenter_notes {
                writeln!(f, "   Notes: {}", notes)?;
            }
        }

        if let Some(metadata) = &outline.generation_metadata {
            writeln!(f)?;
            writeln!(
                f,
                "Generated by {} at {}",
                metadata.model,
                metadata.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            )?;
        }
        Ok(())
    }
}
