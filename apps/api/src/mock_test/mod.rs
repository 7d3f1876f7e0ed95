// AI mock test: LLM-generated multiple-choice questions locked into the
// session, then graded locally.

pub mod generator;
pub mod grading;
pub mod handlers;
pub mod models;
pub mod prompts;
