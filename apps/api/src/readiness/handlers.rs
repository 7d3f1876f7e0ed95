//! Axum route handlers for the readiness dashboard.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::readiness::report::{build_report, ReadinessReport};
use crate::readiness::scoring::{quick_readiness, validate_cgpa, validate_projects, ReadinessInput};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuickReadinessRequest {
    pub cgpa: f64,
    pub internship: bool,
    pub projects: u32,
}

#[derive(Debug, Serialize)]
pub struct QuickReadinessResponse {
    pub score: f64,
}

#[derive(Debug, Deserialize)]
pub struct ReadinessRequest {
    #[serde(flatten)]
    pub input: ReadinessInput,
    /// Replaces the session resume when present.
    pub resume_text: Option<String>,
    pub target_role: Option<String>,
    pub job_description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/readiness/quick
///
/// Resume-free estimate from CGPA, internship and project count.
pub async fn handle_quick_readiness(
    Json(req): Json<QuickReadinessRequest>,
) -> Result<Json<QuickReadinessResponse>, AppError> {
    validate_cgpa(req.cgpa).map_err(AppError::Validation)?;
    validate_projects(req.projects).map_err(AppError::Validation)?;

    Ok(Json(QuickReadinessResponse {
        score: quick_readiness(req.cgpa, req.internship, req.projects),
    }))
}

/// POST /api/v1/sessions/:id/readiness
///
/// Full profile analysis. Detected skills are remembered on the session so the
/// mock test can target them.
pub async fn handle_analyze_readiness(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReadinessRequest>,
) -> Result<Json<ReadinessReport>, AppError> {
    req.input.validate().map_err(AppError::Validation)?;

    let ReadinessRequest {
        input,
        resume_text,
        target_role,
        job_description,
    } = req;

    let (resume_text, target_role) = state
        .sessions
        .require_update(id, |s| {
            if let Some(text) = resume_text {
                s.resume_text = text;
            }
            if let Some(role) = target_role.filter(|r| !r.trim().is_empty()) {
                s.target_role = role.trim().to_string();
            }
            (s.resume_text.clone(), s.target_role.clone())
        })
        .await?;

    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please upload or paste your resume text to proceed.".to_string(),
        ));
    }

    let report = build_report(
        &input,
        &resume_text,
        job_description.as_deref(),
        &target_role,
    );

    let skills = report.skills_detected.clone();
    state
        .sessions
        .require_update(id, |s| s.extracted_skills = skills)
        .await?;

    tracing::info!(
        "Readiness for session {id}: {}% ({} skills)",
        report.probability,
        report.skills_detected.len()
    );

    Ok(Json(report))
}
