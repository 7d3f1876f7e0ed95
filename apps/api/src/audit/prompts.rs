// Prompt template for the LinkedIn narrative summary.

use crate::llm_client::prompts::{fill_template, truncate_chars};

pub const LINKEDIN_SUMMARY_PROMPT: &str = r#"Write a short professional narrative for a student's LinkedIn profile.

TARGET ROLE: {target_role}

RESUME:
{resume_text}

Reply with exactly 5 markdown bullet points in the form "* **Theme:** sentence".
Cover: core technical foundation, strongest skill area, a standout project, practical experience, and the role they are optimizing for.
Only use facts present in the resume. Do not invent employers, certifications or numbers."#;

/// Resume characters sent to the model for the narrative.
pub const SUMMARY_RESUME_CHARS: usize = 2_000;

pub fn build_summary_prompt(target_role: &str, resume_text: &str) -> String {
    fill_template(
        LINKEDIN_SUMMARY_PROMPT,
        &[
            ("target_role", target_role),
            ("resume_text", truncate_chars(resume_text, SUMMARY_RESUME_CHARS)),
        ],
    )
}
