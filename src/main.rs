use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use capmatch::catalog::Catalog;
use capmatch::consts::{DEFAULT_BIND_ADDR, DEFAULT_DATA_PATH};
use capmatch::engine::MatchEngine;
use capmatch::matcher::gemini::GeminiMatcher;
use capmatch::web::{self, AppState};

#[derive(Parser)]
#[command(name = "capmatch", version, about = "AI-assisted spare capacity matching.")]
struct Cli {
    /// Path to the offer dataset (CSV)
    #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Address to bind the web shell to
    #[arg(short, long, default_value = DEFAULT_BIND_ADDR)]
    addr: SocketAddr,

    /// Gemini model name
    #[arg(long)]
    model: Option<String>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Both the dataset and the credential are startup-fatal: no fallback
    // catalog, no lazily discovered missing key
    let catalog = Arc::new(
        Catalog::load(&cli.data)
            .with_context(|| format!("failed to load offer dataset from {}", cli.data.display()))?,
    );
    info!(offers = catalog.len(), path = %cli.data.display(), "offer catalog loaded");

    let matcher = GeminiMatcher::new(cli.api_key, cli.model)?;
    info!(model = matcher.model(), "matching client ready");

    let engine = MatchEngine::new(Box::new(matcher), catalog);
    let state = Arc::new(AppState { engine });

    web::serve(cli.addr, state).await
}
