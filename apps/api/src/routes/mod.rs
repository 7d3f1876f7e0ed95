pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::audit::handlers as audit;
use crate::certificate::handlers as certificate;
use crate::copilot;
use crate::mock_test::handlers as mock_test;
use crate::readiness::handlers as readiness;
use crate::resume::handlers as resume;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless scoring
        .route(
            "/api/v1/readiness/quick",
            post(readiness::handle_quick_readiness),
        )
        .route("/api/v1/audits/linkedin", post(audit::handle_linkedin_audit))
        .route(
            "/api/v1/audits/github/:username",
            get(audit::handle_github_audit),
        )
        // Sessions
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route("/api/v1/sessions/:id", get(session::handle_get_session))
        .route(
            "/api/v1/sessions/:id/profile",
            patch(session::handle_update_profile),
        )
        .route(
            "/api/v1/sessions/:id/resume",
            post(resume::handle_upload_resume),
        )
        .route(
            "/api/v1/sessions/:id/readiness",
            post(readiness::handle_analyze_readiness),
        )
        // LLM-backed pages
        .route(
            "/api/v1/sessions/:id/certificate",
            post(certificate::handle_verify_certificate),
        )
        .route(
            "/api/v1/sessions/:id/linkedin/summary",
            post(audit::handle_linkedin_summary),
        )
        .route(
            "/api/v1/sessions/:id/mock-test",
            get(mock_test::handle_get_mock_test).post(mock_test::handle_generate_mock_test),
        )
        .route(
            "/api/v1/sessions/:id/mock-test/submit",
            post(mock_test::handle_submit_mock_test),
        )
        .route(
            "/api/v1/sessions/:id/chat",
            get(copilot::handle_chat_history).post(copilot::handle_chat),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
