use anyhow::Result;
use clap::Parser;
use podium_server::AnalyticsStore;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Podium analytics collector", long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// SQLite database file (default: <data dir>/podium/analytics.db)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("podium"))
        .unwrap_or_else(|| PathBuf::from(".podium"))
        .join("analytics.db")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let db = args.db.unwrap_or_else(default_db_path);
    info!(db = %db.display(), port = args.port, "Starting Podium analytics collector");

    let store = Arc::new(AnalyticsStore::open(&db)?);
    let listener = TcpListener::bind((args.host.as_str(), args.port)).await?;
    podium_server::serve(listener, store).await?;

    Ok(())
}
