//! HTTP server binary for the dad jokes API.

use clap::Parser;
use dadjokes::{AppConfig, JokeServer, JokeService};
use joke_api::JokeClient;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Dad jokes API: random jokes and highlighted search over icanhazdadjoke.
#[derive(Parser)]
#[command(name = "dadjokes-server", version, about)]
struct Cli {
    /// Path to TOML configuration file. Defaults to the platform config directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind, overriding the config file.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the config file.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr. Override with RUST_LOG.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dadjokes=info,joke_api=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => AppConfig::from_file(path)?,
        None => AppConfig::load_or_default(&AppConfig::default_config_path())?,
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    let client = JokeClient::new(config.joke_api.clone())?;
    info!(base_url = %client.config().base_url, "using joke API");
    let service = Arc::new(JokeService::new(client));

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown requested");
            cancel_clone.cancel();
        }
    });

    let mut server = JokeServer::start(service, &config.server, cancel)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "dadjokes-server failed to start");
            anyhow::anyhow!("dadjokes-server failed: {e}")
        })?;
    server.wait().await;

    info!("dadjokes-server shut down cleanly");
    Ok(())
}
