//! Mock test generation: prompt building and defensive parsing of model output.

use thiserror::Error;

use crate::llm_client::prompts::{fill_template, JSON_ONLY_SYSTEM};
use crate::llm_client::{parse_json_reply, ChatMessage, ChatModel, LlmError};
use crate::mock_test::models::{GeneratedTest, McqQuestion};
use crate::mock_test::prompts::{DEFAULT_SKILLS, MOCK_TEST_PROMPT, QUESTION_COUNT};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("malformed test: {0}")]
    Malformed(String),
}

/// Skills to test on, falling back to a generic set. The flag reports the fallback.
pub fn resolve_skills(extracted: &[String]) -> (Vec<String>, bool) {
    if extracted.is_empty() {
        (DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(), true)
    } else {
        (extracted.to_vec(), false)
    }
}

pub fn build_prompt(target_role: &str, skills: &[String]) -> String {
    let skills = skills.join(", ");
    let question_count = QUESTION_COUNT.to_string();
    fill_template(
        MOCK_TEST_PROMPT,
        &[
            ("target_role", target_role),
            ("skills", skills.as_str()),
            ("question_count", question_count.as_str()),
        ],
    )
}

/// Parses and validates raw model output. Fenced JSON is accepted.
pub fn parse_test(raw: &str) -> Result<Vec<McqQuestion>, GenerationError> {
    let test: GeneratedTest = parse_json_reply(raw).map_err(|e| match e {
        LlmError::Parse(err) => GenerationError::Malformed(err.to_string()),
        other => GenerationError::Llm(other),
    })?;
    validate_questions(&test.questions)?;
    Ok(test.questions)
}

fn validate_questions(questions: &[McqQuestion]) -> Result<(), GenerationError> {
    if questions.is_empty() {
        return Err(GenerationError::Malformed("no questions".to_string()));
    }
    for (i, q) in questions.iter().enumerate() {
        if q.question.trim().is_empty() {
            return Err(GenerationError::Malformed(format!("question {i} is blank")));
        }
        if q.options.is_empty() {
            return Err(GenerationError::Malformed(format!(
                "question {i} has no options"
            )));
        }
        if !q.options.contains(&q.correct_answer) {
            return Err(GenerationError::Malformed(format!(
                "question {i} answer is not one of its options"
            )));
        }
    }
    Ok(())
}

pub async fn generate_test(
    llm: &dyn ChatModel,
    target_role: &str,
    skills: &[String],
) -> Result<Vec<McqQuestion>, GenerationError> {
    let prompt = build_prompt(target_role, skills);
    let raw = llm
        .complete(&[ChatMessage::system(JSON_ONLY_SYSTEM), ChatMessage::user(prompt)])
        .await?;
    parse_test(&raw)
}
