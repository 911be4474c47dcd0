mod config;
mod errors;
mod jobs;
mod models;
mod routes;
mod search;
mod session;
mod state;
mod voice;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::JobStore;
use crate::routes::build_router;
use crate::state::AppState;
use crate::voice::LoggedSpeech;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobVoice API v{}", env!("CARGO_PKG_VERSION"));

    let store = JobStore::fixture();
    info!("Job store loaded ({} postings)", store.len());

    info!(
        "Subagent delay {:?}..={:?}, silence threshold {:?}",
        config.subagent_delay.min, config.subagent_delay.max, config.silence_threshold
    );

    let speech = Arc::new(LoggedSpeech::new(config.speech));
    let state = AppState::new(&config, store, speech)?;

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // browser presentation layer runs on another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
