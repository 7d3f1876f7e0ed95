// Mock test generation prompt.

pub const QUESTION_COUNT: usize = 3;

/// Used when the session has no detected skills yet.
pub const DEFAULT_SKILLS: &[&str] = &["Python", "Data Structures", "Problem Solving"];

pub const MOCK_TEST_PROMPT: &str = r#"You are a technical interviewer for the role of {target_role}.
The candidate knows: {skills}.
Generate a {question_count}-question Multiple Choice Test to check their knowledge.

You MUST reply strictly with a valid JSON object in this exact format. Do not add markdown blocks like ```json or any other text.
{
    "questions": [
        {
            "question": "Question text here",
            "options": ["Option A", "Option B", "Option C", "Option D"],
            "correct_answer": "Option A",
            "explanation": "Explanation of why this is correct."
        }
    ]
}
The correct_answer MUST be copied exactly from one of the options."#;
