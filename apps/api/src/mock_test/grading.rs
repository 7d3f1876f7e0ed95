use std::collections::HashMap;

use crate::mock_test::models::{McqQuestion, QuestionReview, TestResult, Verdict};

/// Grades answers keyed by question index. Unanswered questions count as wrong.
pub fn grade(questions: &[McqQuestion], answers: &HashMap<usize, String>) -> TestResult {
    let review: Vec<QuestionReview> = questions
        .iter()
        .enumerate()
        .map(|(index, q)| {
            let your_answer = answers.get(&index).cloned();
            let is_correct = your_answer.as_deref() == Some(q.correct_answer.as_str());
            QuestionReview {
                index,
                question: q.question.clone(),
                your_answer,
                correct_answer: q.correct_answer.clone(),
                is_correct,
                explanation: q.explanation.clone(),
            }
        })
        .collect();

    let score = review.iter().filter(|r| r.is_correct).count();
    let total = questions.len();
    let verdict = if total > 0 && score == total {
        Verdict::Perfect
    } else if score > 0 {
        Verdict::GoodAttempt
    } else {
        Verdict::NeedsWork
    };

    TestResult {
        score,
        total,
        verdict,
        message: verdict.message().to_string(),
        review,
    }
}
