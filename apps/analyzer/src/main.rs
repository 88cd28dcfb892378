mod analysis;
mod cli;
mod config;
mod errors;
mod input;
mod profile;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Only `serve` needs a valid config; its error surfaces there
    let config = Config::from_env();
    let rust_log = match &config {
        Ok(config) => config.rust_log.clone(),
        Err(_) => Config::default().rust_log,
    };

    // Logs go to stderr; stdout carries only the JSON report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli::run(cli, config)
}

/// Binds the HTTP service and serves until the process is stopped.
pub(crate) async fn serve(state: AppState) -> Result<()> {
    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    let addr: SocketAddr = format!("{}:{}", state.config.host, state.config.port).parse()?;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
