// Profile audits: LinkedIn checklist scoring and GitHub portfolio analysis.

pub mod github;
pub mod handlers;
pub mod linkedin;
pub mod prompts;
