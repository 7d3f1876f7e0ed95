use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::prompts::truncate_chars;
use crate::resume::pdf::{extract_pdf_text_blocking, read_file_field, text_stats, TextStats};
use crate::state::AppState;

const PREVIEW_CHARS: usize = 1_000;

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    pub stats: TextStats,
    pub preview: String,
}

/// POST /api/v1/sessions/:id/resume
///
/// Accepts a PDF in the `file` multipart field, extracts its text and stores
/// it as the session's resume.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    // Fail fast on unknown sessions before reading the upload.
    state.sessions.require(id).await?;

    let data = read_file_field(multipart).await?;
    let text = extract_pdf_text_blocking(data).await.map_err(|e| {
        tracing::warn!("Resume extraction failed for session {id}: {e}");
        AppError::UnprocessableEntity("Could not read PDF.".to_string())
    })?;

    let stats = text_stats(&text);
    let preview = truncate_chars(&text, PREVIEW_CHARS).to_string();

    state
        .sessions
        .require_update(id, |s| s.resume_text = text)
        .await?;

    tracing::info!(
        "Resume parsed for session {id}: {} words, {} digits",
        stats.words,
        stats.digits
    );

    Ok(Json(ResumeUploadResponse { stats, preview }))
}
