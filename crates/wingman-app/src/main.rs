use std::env;
use std::path::PathBuf;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use wingman_config::Settings;

mod console;
mod events;
mod io;
mod runtime;

#[derive(Parser, Debug)]
#[command(name = "wingman", about = "Hotkey-driven reply suggestions for an on-screen chat")]
struct Cli {
    /// Override the region config file (default: REGION_FILE or region.json)
    #[arg(long)]
    region_file: Option<PathBuf>,

    /// Override the persona samples directory
    #[arg(long)]
    persona_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::from_env();
    if let Some(path) = cli.region_file {
        settings.region_file = path;
    }
    if let Some(dir) = cli.persona_dir {
        settings.persona_dir = dir;
    }

    if settings.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; generation will fail until it is");
    }
    if let Some(dir) = settings.tesseract_path.clone() {
        extend_path(&dir)?;
    }

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    runtime::run(settings, shutdown).await
}

/// Make an explicitly configured tesseract install visible to the OCR
/// pipeline, which invokes the binary through PATH.
fn extend_path(dir: &str) -> anyhow::Result<()> {
    let path = env::var_os("PATH").unwrap_or_default();
    let mut paths: Vec<PathBuf> = env::split_paths(&path).collect();
    paths.insert(0, PathBuf::from(dir));
    let joined = env::join_paths(paths)?;
    // Still single-threaded at this point in startup.
    unsafe { env::set_var("PATH", joined) };
    Ok(())
}
