//! Axum route handlers for the LinkedIn and GitHub audits.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::audit::github::{build_audit, is_valid_username, GitHubAudit};
use crate::audit::linkedin::{audit_profile, LinkedInAudit, LinkedInProfile};
use crate::audit::prompts::build_summary_prompt;
use crate::errors::AppError;
use crate::llm_client::prompts::PLACEMENT_ASSISTANT_SYSTEM;
use crate::llm_client::ChatMessage;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LinkedInSummaryResponse {
    pub summary: String,
}

/// POST /api/v1/audits/linkedin
pub async fn handle_linkedin_audit(Json(profile): Json<LinkedInProfile>) -> Json<LinkedInAudit> {
    Json(audit_profile(&profile))
}

/// POST /api/v1/sessions/:id/linkedin/summary
///
/// Asks the model for a resume-grounded narrative to paste into the profile.
pub async fn handle_linkedin_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LinkedInSummaryResponse>, AppError> {
    let session = state.sessions.require(id).await?;
    if !session.has_resume() {
        return Err(AppError::Validation(
            "Please upload your resume first so the summary can be based on it.".to_string(),
        ));
    }

    let prompt = build_summary_prompt(&session.target_role, &session.resume_text);

    let summary = state
        .llm
        .complete(&[
            ChatMessage::system(PLACEMENT_ASSISTANT_SYSTEM),
            ChatMessage::user(prompt),
        ])
        .await?;

    Ok(Json(LinkedInSummaryResponse { summary }))
}

/// GET /api/v1/audits/github/:username
pub async fn handle_github_audit(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<GitHubAudit>, AppError> {
    let username = username.trim();
    if !is_valid_username(username) {
        return Err(AppError::Validation(format!(
            "'{username}' is not a valid GitHub username"
        )));
    }

    let repos = state.github.list_repositories(username).await?;
    tracing::info!("GitHub audit for {username}: {} repositories", repos.len());

    Ok(Json(build_audit(username, &repos)))
}
