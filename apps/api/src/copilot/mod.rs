//! Career copilot: free-form chat with the placement assistant.
//!
//! The whole session history is replayed to the model on every turn.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::prompts::PLACEMENT_ASSISTANT_SYSTEM;
use crate::llm_client::ChatMessage;
use crate::state::AppState;

const MAX_MESSAGE_CHARS: usize = 4_000;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: ChatMessage,
    pub message_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ChatHistory {
    pub messages: Vec<ChatMessage>,
}

/// System prompt followed by the stored conversation.
pub fn conversation(history: &[ChatMessage]) -> Vec<ChatMessage> {
    std::iter::once(ChatMessage::system(PLACEMENT_ASSISTANT_SYSTEM))
        .chain(history.iter().cloned())
        .collect()
}

/// POST /api/v1/sessions/:id/chat
///
/// The user turn is recorded before the model is called, so it survives a
/// failed completion.
pub async fn handle_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AppError::Validation(format!(
            "message cannot exceed {MAX_MESSAGE_CHARS} characters"
        )));
    }

    let history = state
        .sessions
        .require_update(id, |s| {
            s.messages.push(ChatMessage::user(message));
            s.messages.clone()
        })
        .await?;

    let reply = state.llm.complete(&conversation(&history)).await?;
    let reply = ChatMessage::assistant(reply);

    let message_count = state
        .sessions
        .require_update(id, |s| {
            s.messages.push(reply.clone());
            s.messages.len()
        })
        .await?;

    Ok(Json(ChatResponse {
        reply,
        message_count,
    }))
}

/// GET /api/v1/sessions/:id/chat
pub async fn handle_chat_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatHistory>, AppError> {
    let session = state.sessions.require(id).await?;
    Ok(Json(ChatHistory {
        messages: session.messages,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::Role;

    #[test]
    fn test_conversation_prepends_system_prompt() {
        let history = vec![
            ChatMessage::user("How do I prepare for DSA rounds?"),
            ChatMessage::assistant("Practice daily."),
        ];
        let convo = conversation(&history);
        assert_eq!(convo.len(), 3);
        assert_eq!(convo[0].role, Role::System);
        assert_eq!(convo[1], history[0]);
        assert_eq!(convo[2].role, Role::Assistant);
    }

    #[test]
    fn test_empty_history_is_just_system() {
        assert_eq!(conversation(&[]).len(), 1);
    }
}
