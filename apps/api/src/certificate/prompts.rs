// Certificate-resume alignment prompt.

pub const CERTIFICATE_TEXT_CHARS: usize = 500;
pub const RESUME_TEXT_CHARS: usize = 1_000;

pub const CERTIFICATE_ALIGNMENT_PROMPT: &str = r#"Analyze this certificate and the candidate's resume.
Certificate Text: {certificate_text}
Resume Text: {resume_text}

Tell the user strictly in 3 short bullet points:
1. What skill/project the certificate proves.
2. If that skill is clearly mentioned in their resume.
3. How they can improve their resume based on this certificate."#;
