use std::sync::Arc;

use crate::audit::github::RepositorySource;
use crate::config::Config;
use crate::llm_client::ChatModel;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Chat-completion backend. Default: `LlmClient` against Groq.
    pub llm: Arc<dyn ChatModel>,
    /// Repository listing backend. Default: `GitHubClient`.
    pub github: Arc<dyn RepositorySource>,
    pub config: Config,
}
