mod error;
mod handlers;
mod router;
mod state;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use watchflow_api::AniListClient;
use watchflow_core::config::AppConfig;
use watchflow_core::Ranker;

use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "watchflow-server", version, about = "Finish-first ranking service")]
struct Cli {
    /// Config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overrides `server.bind`.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watchflow=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("loading config")?;
    let bind = cli.bind.unwrap_or(config.server.bind);

    let anilist = AniListClient::with_client(reqwest::Client::new(), config.anilist.api_url);
    tracing::info!(api_url = anilist.api_url(), "using AniList endpoint");

    let app = router::create_router(AppState::new(Ranker::new(anilist)));

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    tracing::info!(addr = %bind, "watchflow server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
