//! Podium CLI binary.
//!
//! This binary provides command-line access to Podium:
//! - Generate an outline from notes
//! - Show, edit, clear, import, and export the current outline
//! - Render the outline to PowerPoint through the render service

use clap::Parser;
use podium::{PodiumConfig, PodiumError, PresenterError, Services};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Short message for the user; full detail goes to the log.
fn user_message(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<PodiumError>() {
        e.user_message()
    } else if let Some(e) = err.downcast_ref::<PresenterError>() {
        e.kind.to_string()
    } else {
        format!("{:#}", err)
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => PodiumConfig::from_file(path)?,
        None => PodiumConfig::load()?,
    };
    let services = Services::from_config(config)?;

    match cli.command {
        Commands::Generate {
            notes,
            audience,
            model,
        } => {
            cli::generate(
                &services,
                notes.as_deref(),
                audience.as_deref(),
                model.as_deref(),
            )
            .await
        }
        Commands::Show => cli::show(&services).await,
        Commands::Edit(args) => cli::edit(&services, args).await,
        Commands::Clear => cli::clear(&services).await,
        Commands::Export { output } => cli::export(&services, &output).await,
        Commands::Import { path } => cli::import_json(&services, &path).await,
        Commands::ImportPptx { path } => cli::import_pptx(&services, &path).await,
        Commands::Render { template, output } => {
            cli::render(&services, template.as_deref(), &output).await
        }
        Commands::Models => cli::list_models(&services),
        Commands::Status => cli::show_status(&services).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "Command failed");
            eprintln!("Error: {}", user_message(&e));
            ExitCode::FAILURE
        }
    }
}
