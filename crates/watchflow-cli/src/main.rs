mod client;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use watchflow_core::config::AppConfig;

use crate::client::HttpRankingClient;
use crate::session::{Session, ViewState};

#[derive(Debug, Parser)]
#[command(name = "watchflow", version, about = "What should I watch next?")]
struct Cli {
    /// AniList username. Without one, usernames are read from stdin.
    username: Option<String>,

    /// Ranking server base URL, overrides `client.server_url`.
    #[arg(long)]
    server: Option<String>,

    /// Config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Open the top-ranked show's page in the browser.
    #[arg(long)]
    open: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "watchflow=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("loading config")?;
    let server_url = cli.server.unwrap_or(config.client.server_url);
    let client = HttpRankingClient::new(&server_url);
    tracing::debug!(endpoint = client.endpoint(), "using ranking server");

    let mut session = Session::new();

    if let Some(username) = cli.username {
        session.set_username(username);
        submit(&mut session, &client, cli.open).await;
        return Ok(());
    }

    print!("{}", render::render(&session));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        session.set_username(line.trim());
        submit(&mut session, &client, cli.open).await;
    }

    Ok(())
}

async fn submit(session: &mut Session, client: &HttpRankingClient, open_top: bool) {
    let ran = session
        .submit(client, |s| print!("{}", render::render(s)))
        .await;
    print!("{}", render::render(session));

    if !(ran && open_top) {
        return;
    }
    if let ViewState::Success(items) = session.state() {
        if let Some(top) = items.first().filter(|i| !i.url.is_empty()) {
            if let Err(e) = open::that(&top.url) {
                tracing::warn!(url = %top.url, error = %e, "failed to open browser");
            }
        }
    }
}
