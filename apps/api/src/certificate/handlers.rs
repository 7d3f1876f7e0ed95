use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use uuid::Uuid;

use crate::certificate::verify::{verify_alignment, CertificateVerification};
use crate::errors::AppError;
use crate::resume::pdf::{extract_pdf_text_blocking, read_file_field};
use crate::state::AppState;

/// POST /api/v1/sessions/:id/certificate
///
/// Cross-references an uploaded certificate PDF with the session resume.
pub async fn handle_verify_certificate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<CertificateVerification>, AppError> {
    let session = state.sessions.require(id).await?;
    if !session.has_resume() {
        return Err(AppError::Validation(
            "Please upload your resume on the main page first so we can verify against it!"
                .to_string(),
        ));
    }

    let data = read_file_field(multipart).await?;
    let certificate_text = extract_pdf_text_blocking(data).await.map_err(|e| {
        tracing::warn!("Certificate extraction failed for session {id}: {e}");
        AppError::UnprocessableEntity("Could not read certificate PDF.".to_string())
    })?;

    let verification =
        verify_alignment(state.llm.as_ref(), &certificate_text, &session.resume_text).await?;

    tracing::info!("Certificate verified for session {id}");
    Ok(Json(verification))
}
