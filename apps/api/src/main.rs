mod colleges;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod profiles;
mod quiz;
mod roadmaps;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::quiz::suggestions::{LlmSuggestionGenerator, SuggestionGenerator, UnavailableGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, config.db_max_connections).await?;

    // Initialize suggestion generator (fallback table only when no API key is set)
    let suggester: Arc<dyn SuggestionGenerator> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.suggestion_timeout)?;
            info!("LLM suggestion generator initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmSuggestionGenerator(llm))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; course suggestions will use the fallback table");
            Arc::new(UnavailableGenerator)
        }
    };

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        suggester,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
