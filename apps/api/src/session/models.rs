use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::llm_client::ChatMessage;
use crate::mock_test::models::{McqQuestion, TestResult};

pub const DEFAULT_TARGET_ROLE: &str = "Software Engineer";

/// Everything the dashboard remembers about one visitor between requests.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub resume_text: String,
    pub target_role: String,
    pub extracted_skills: Vec<String>,
    pub messages: Vec<ChatMessage>,
    pub mock_test: Option<Vec<McqQuestion>>,
    pub test_submitted: bool,
    pub last_result: Option<TestResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            resume_text: String::new(),
            target_role: DEFAULT_TARGET_ROLE.to_string(),
            extracted_skills: Vec::new(),
            messages: Vec::new(),
            mock_test: None,
            test_submitted: false,
            last_result: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_resume(&self) -> bool {
        !self.resume_text.trim().is_empty()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Public projection of a session. The resume body and the locked test
/// answers stay server-side.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub target_role: String,
    pub has_resume: bool,
    pub resume_preview: String,
    pub extracted_skills: Vec<String>,
    pub message_count: usize,
    pub has_mock_test: bool,
    pub test_submitted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const PREVIEW_CHARS: usize = 500;

impl From<&Session> for SessionView {
    fn from(s: &Session) -> Self {
        SessionView {
            session_id: s.id,
            target_role: s.target_role.clone(),
            has_resume: s.has_resume(),
            resume_preview: crate::llm_client::prompts::truncate_chars(
                &s.resume_text,
                PREVIEW_CHARS,
            )
            .to_string(),
            extracted_skills: s.extracted_skills.clone(),
            message_count: s.messages.len(),
            has_mock_test: s.mock_test.is_some(),
            test_submitted: s.test_submitted,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let s = Session::new();
        assert_eq!(s.target_role, "Software Engineer");
        assert!(s.resume_text.is_empty());
        assert!(s.extracted_skills.is_empty());
        assert!(s.messages.is_empty());
        assert!(s.mock_test.is_none());
        assert!(!s.test_submitted);
    }

    #[test]
    fn test_whitespace_resume_is_not_a_resume() {
        let mut s = Session::new();
        s.resume_text = "  \n\t ".to_string();
        assert!(!s.has_resume());
    }

    #[test]
    fn test_view_truncates_preview() {
        let mut s = Session::new();
        s.resume_text = "x".repeat(2_000);
        let view = SessionView::from(&s);
        assert_eq!(view.resume_preview.chars().count(), 500);
        assert!(view.has_resume);
    }
}
