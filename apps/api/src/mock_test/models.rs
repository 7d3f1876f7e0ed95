use serde::{Deserialize, Serialize};

/// One multiple-choice question exactly as the model returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McqQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

/// Top-level shape the model is told to reply with.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedTest {
    pub questions: Vec<McqQuestion>,
}

/// Question as shown before submission: no answer, no explanation.
#[derive(Debug, Clone, Serialize)]
pub struct PublicQuestion {
    pub index: usize,
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MockTestView {
    pub target_role: String,
    pub skills: Vec<String>,
    pub used_default_skills: bool,
    pub questions: Vec<PublicQuestion>,
    pub submitted: bool,
    pub last_result: Option<TestResult>,
}

pub fn public_questions(questions: &[McqQuestion]) -> Vec<PublicQuestion> {
    questions
        .iter()
        .enumerate()
        .map(|(index, q)| PublicQuestion {
            index,
            question: q.question.clone(),
            options: q.options.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Perfect,
    GoodAttempt,
    NeedsWork,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Perfect => "Perfect Score! You are highly prepared for this role.",
            Verdict::GoodAttempt => "Good attempt! Review the explanations below to improve.",
            Verdict::NeedsWork => {
                "Needs work! Don't worry, read the explanations to learn the concepts."
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionReview {
    pub index: usize,
    pub question: String,
    pub your_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub score: usize,
    pub total: usize,
    pub verdict: Verdict,
    pub message: String,
    pub review: Vec<QuestionReview>,
}
