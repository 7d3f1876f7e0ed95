mod audit;
mod certificate;
mod config;
mod copilot;
mod errors;
mod llm_client;
mod mock_test;
mod readiness;
mod resume;
mod routes;
mod session;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::audit::github::GitHubClient;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PlacementIQ API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.llm_base_url.clone(), config.groq_api_key.clone())?;
    if llm.is_configured() {
        info!(
            "LLM client initialized (model: {}, base: {})",
            llm_client::MODEL,
            config.llm_base_url
        );
    } else {
        warn!("GROQ_API_KEY not set; AI endpoints will answer 503");
    }

    // Initialize GitHub client
    let github = GitHubClient::new(config.github_api_url.clone(), config.github_token.clone())?;
    info!(
        "GitHub client initialized (authenticated: {})",
        config.github_token.is_some()
    );

    // Build app state
    let state = AppState {
        sessions: SessionStore::new(),
        llm: Arc::new(llm),
        github: Arc::new(github),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the dashboard has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
