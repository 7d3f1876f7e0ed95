//! Axum route handlers for the AI mock test.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::mock_test::generator::{generate_test, resolve_skills, GenerationError};
use crate::mock_test::grading::grade;
use crate::mock_test::models::{public_questions, MockTestView, TestResult};
use crate::session::models::Session;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    /// Chosen option text keyed by question index.
    #[serde(default)]
    pub answers: HashMap<usize, String>,
}

fn view_of(session: &Session) -> Option<MockTestView> {
    let questions = session.mock_test.as_ref()?;
    let (skills, used_default_skills) = resolve_skills(&session.extracted_skills);
    Some(MockTestView {
        target_role: session.target_role.clone(),
        skills,
        used_default_skills,
        questions: public_questions(questions),
        submitted: session.test_submitted,
        last_result: session.last_result.clone(),
    })
}

/// POST /api/v1/sessions/:id/mock-test
///
/// Generates a fresh test from the session's role and skills and locks it in.
pub async fn handle_generate_mock_test(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MockTestView>, AppError> {
    let session = state.sessions.require(id).await?;
    let (skills, _) = resolve_skills(&session.extracted_skills);

    let questions = generate_test(state.llm.as_ref(), &session.target_role, &skills)
        .await
        .map_err(|e| match e {
            GenerationError::Llm(llm) => AppError::from(llm),
            GenerationError::Malformed(reason) => {
                tracing::warn!("Mock test output rejected for session {id}: {reason}");
                AppError::UnprocessableEntity(
                    "Failed to generate test. The AI might have returned an invalid format. Try again!"
                        .to_string(),
                )
            }
        })?;

    let view = state
        .sessions
        .require_update(id, |s| {
            s.mock_test = Some(questions);
            s.test_submitted = false;
            s.last_result = None;
            view_of(s)
        })
        .await?
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("mock test vanished after store")))?;

    Ok(Json(view))
}

/// GET /api/v1/sessions/:id/mock-test
pub async fn handle_get_mock_test(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MockTestView>, AppError> {
    let session = state.sessions.require(id).await?;
    view_of(&session)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No mock test has been generated yet".to_string()))
}

/// POST /api/v1/sessions/:id/mock-test/submit
pub async fn handle_submit_mock_test(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitAnswersRequest>,
) -> Result<Json<TestResult>, AppError> {
    let result = state
        .sessions
        .require_update(id, |s| {
            let questions = s.mock_test.as_ref()?;
            let result = grade(questions, &req.answers);
            s.test_submitted = true;
            s.last_result = Some(result.clone());
            Some(result)
        })
        .await?
        .ok_or_else(|| {
            AppError::Validation("Generate a mock test before submitting answers.".to_string())
        })?;

    tracing::info!(
        "Mock test submitted for session {id}: {}/{}",
        result.score,
        result.total
    );
    Ok(Json(result))
}
