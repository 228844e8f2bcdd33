mod config;
mod documents;
mod errors;
mod generation;
mod job_posting;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::job_posting::JobPostingFetcher;
use crate::llm_client::{GeminiGenerator, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PrepMyJob API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let generator = GeminiGenerator::new(config.gemini_api_key.clone(), config.llm_timeout)?;
    info!("LLM client initialized (model: {})", generator.model());
    let llm = LlmClient::new(Arc::new(generator));

    // Initialize job posting fetcher
    let job_fetcher = Arc::new(JobPostingFetcher::new()?);

    let state = AppState { llm, job_fetcher };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the deployed front end

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
