//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the podium binary.

mod commands;
mod generate;
mod info;
mod outline;

pub use commands::{Cli, Commands, EditArgs};
pub use generate::generate;
pub use info::{list_models, show_status};
pub use outline::{clear, edit, export, import_json, import_pptx, render, show};
