mod alignment;
mod config;
mod errors;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::alignment::{AlignmentEngine, KnowledgeBase};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Alignment API v{}", env!("CARGO_PKG_VERSION"));

    // Load the knowledge base once; any configuration error aborts startup
    let knowledge_base = Arc::new(match &config.kb_path {
        Some(path) => KnowledgeBase::load_from_path(path)
            .with_context(|| format!("Invalid knowledge base at {}", path.display()))?,
        None => KnowledgeBase::builtin().context("Embedded knowledge base is invalid")?,
    });

    let scorer = Arc::new(AlignmentEngine::new(Arc::clone(&knowledge_base)));
    info!(
        "Alignment engine ready (threshold: {}, batch limit: {})",
        knowledge_base.weights().course_match_threshold,
        config.batch_max_rows
    );

    let state = AppState {
        config: config.clone(),
        knowledge_base,
        scorer,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
