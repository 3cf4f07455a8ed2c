//! Marketplace Search Proxy
//!
//! A thin proxy in front of a marketplace API, built with Tokio, Axum and reqwest.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │               MARKETPLACE PROXY              │
//!                         │                                              │
//!     Client Request      │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!     ────────────────────┼─▶│  http   │───▶│ handlers │───▶│upstream │──┼──▶ Marketplace
//!                         │  │ server  │    │          │    │ client  │  │      API
//!                         │  └─────────┘    └────┬─────┘    └─────────┘  │
//!                         │                      │                       │
//!     Client Response     │  ┌─────────┐    ┌────▼─────┐                 │
//!     ◀───────────────────┼──│  JSON   │◀───│ mapping  │                 │
//!                         │  └─────────┘    └──────────┘                 │
//!                         │                                              │
//!                         │  config · observability · lifecycle          │
//!                         └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use marketplace_proxy::config::load_config;
use marketplace_proxy::http::HttpServer;
use marketplace_proxy::lifecycle::{shutdown_on_signal, Shutdown};
use marketplace_proxy::observability::{logging::init_logging, metrics::init_metrics};

#[derive(Parser)]
#[command(name = "marketplace-proxy", version)]
#[command(about = "Marketplace search and item-detail proxy", long_about = None)]
struct Cli {
    /// Optional TOML configuration file. PORT and MELI_API_URL override it.
    #[arg(short, long, env = "PROXY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.observability)?;

    tracing::info!("marketplace-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        upstream = %config.upstream.base_url,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_shutdown = shutdown.subscribe();

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        shutdown_on_signal(&signal_shutdown).await;
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
