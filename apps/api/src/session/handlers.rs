use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::models::SessionView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    pub resume_text: Option<String>,
    pub target_role: Option<String>,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let session = state.sessions.create().await;
    tracing::info!(
        "Created session {} ({} active)",
        session.id,
        state.sessions.len().await
    );
    (StatusCode::CREATED, Json(SessionView::from(&session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.require(id).await?;
    Ok(Json(SessionView::from(&session)))
}

/// PATCH /api/v1/sessions/:id/profile
///
/// Sets the pasted resume text and/or target role. Omitted fields are left alone.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ProfileUpdate>,
) -> Result<Json<SessionView>, AppError> {
    if let Some(role) = &req.target_role {
        if role.trim().is_empty() {
            return Err(AppError::Validation(
                "target_role cannot be empty".to_string(),
            ));
        }
    }

    let view = state
        .sessions
        .require_update(id, |s| {
            if let Some(text) = req.resume_text {
                s.resume_text = text;
            }
            if let Some(role) = req.target_role {
                s.target_role = role.trim().to_string();
            }
            SessionView::from(&*s)
        })
        .await?;

    Ok(Json(view))
}
