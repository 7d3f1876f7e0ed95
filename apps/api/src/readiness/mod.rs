// Placement readiness: skill detection, weighted scoring, explanations.
// Pure functions only; no LLM calls happen here.

pub mod handlers;
pub mod report;
pub mod scoring;
pub mod skills;
