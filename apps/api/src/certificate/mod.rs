// Certificate-resume alignment check via the LLM.

pub mod handlers;
pub mod prompts;
pub mod verify;
