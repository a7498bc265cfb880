//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Podium - turn speaker notes into a slide outline
#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(about = "Turn speaker notes into a slide outline and render it to PowerPoint", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an outline from notes (Ctrl-C cancels)
    Generate {
        /// Notes file; reads stdin when omitted or `-`
        notes: Option<PathBuf>,

        /// Audience key from the configuration, or free text
        #[arg(short, long)]
        audience: Option<String>,

        /// Model key or gateway model id
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Show the current outline
    Show,

    /// Edit one slide of the current outline
    Edit(EditArgs),

    /// Clear the current outline
    Clear,

    /// Export the outline as JSON
    Export {
        /// Directory to write into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Import an outline from a JSON export
    Import {
        /// JSON file
        path: PathBuf,
    },

    /// Import an outline from an existing PowerPoint file
    ImportPptx {
        /// `.pptx` file
        path: PathBuf,
    },

    /// Render the outline to PowerPoint through the render service
    Render {
        /// Existing presentation to update instead of starting blank
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Directory to write into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// List configured models
    Models,

    /// Show configuration and service health
    Status,
}

/// Changes to apply to one slide.
#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Slide number (1-based)
    pub slide: usize,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// Replace bullets (repeat for several)
    #[arg(long = "bullet")]
    pub bullets: Vec<String>,

    /// Replace content lines (repeat for several)
    #[arg(long = "content")]
    pub content: Vec<String>,

    /// New speaker notes
    #[arg(long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,

    /// Slide type (title, agenda, section, content, conclusion, ...)
    #[arg(long = "type")]
    pub slide_type: Option<String>,

    /// Remove all bullets
    #[arg(long, conflicts_with = "bullets")]
    pub clear_bullets: bool,

    /// Remove all content lines
    #[arg(long, conflicts_with = "content")]
    pub clear_content: bool,

    /// Remove the speaker notes
    #[arg(long)]
    pub clear_notes: bool,
}
