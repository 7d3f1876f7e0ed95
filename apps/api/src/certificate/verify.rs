use serde::Serialize;

use crate::certificate::prompts::{
    CERTIFICATE_ALIGNMENT_PROMPT, CERTIFICATE_TEXT_CHARS, RESUME_TEXT_CHARS,
};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, truncate_chars};
use crate::llm_client::{complete_prompt, ChatModel};

#[derive(Debug, Clone, Serialize)]
pub struct CertificateVerification {
    /// Three markdown bullets from the model.
    pub analysis: String,
}

/// Both documents are cut to a fixed character budget before prompting.
pub fn build_alignment_prompt(certificate_text: &str, resume_text: &str) -> String {
    fill_template(
        CERTIFICATE_ALIGNMENT_PROMPT,
        &[
            (
                "certificate_text",
                truncate_chars(certificate_text, CERTIFICATE_TEXT_CHARS),
            ),
            ("resume_text", truncate_chars(resume_text, RESUME_TEXT_CHARS)),
        ],
    )
}

pub async fn verify_alignment(
    llm: &dyn ChatModel,
    certificate_text: &str,
    resume_text: &str,
) -> Result<CertificateVerification, AppError> {
    let prompt = build_alignment_prompt(certificate_text, resume_text);
    let analysis = complete_prompt(llm, &prompt).await?;
    Ok(CertificateVerification { analysis })
}
