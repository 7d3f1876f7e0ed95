//! Turns raw scores into the explanation, company targets and action plan
//! shown next to the readiness number.

use serde::{Deserialize, Serialize};

use crate::readiness::scoring::{
    readiness_probability, resume_quality, round1, ReadinessInput,
};
use crate::readiness::skills::{extract_skills, skill_gaps};
use crate::resume::pdf::{text_stats, TextStats};

/// `(company tier, difficulty)`. The match score is probability / difficulty.
const COMPANY_TARGETS: &[(&str, f64)] = &[
    ("FAANG", 1.3),
    ("Tier-1 Startup", 1.1),
    ("Service Based", 0.8),
];
const COMPANY_FLOOR: f64 = 5.0;
const COMPANY_CEILING: f64 = 95.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReasonKind {
    Strength,
    Weakness,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReason {
    pub kind: ReasonKind,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetencyLevel {
    pub metric: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyTarget {
    pub company: String,
    pub difficulty: f64,
    pub match_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessReport {
    pub target_role: String,
    pub probability: f64,
    pub resume_quality: f64,
    pub skills_detected: Vec<String>,
    pub project_count: u32,
    pub resume_stats: TextStats,
    pub reasons: Vec<ScoreReason>,
    pub competency: Vec<CompetencyLevel>,
    pub company_targets: Vec<CompanyTarget>,
    pub action_plan: Vec<String>,
    /// Dictionary skills the job description mentions but the resume lacks.
    pub skill_gaps: Vec<String>,
}

pub fn build_report(
    input: &ReadinessInput,
    resume_text: &str,
    job_description: Option<&str>,
    target_role: &str,
) -> ReadinessReport {
    let skills = extract_skills(resume_text);
    let stats = text_stats(resume_text);
    let probability = readiness_probability(input, skills.len());

    ReadinessReport {
        target_role: target_role.to_string(),
        probability,
        resume_quality: resume_quality(&stats, skills.len()),
        project_count: input.projects,
        resume_stats: stats,
        reasons: score_reasons(input, skills.len()),
        competency: competency_levels(input, skills.len()),
        company_targets: company_targets(probability),
        action_plan: action_plan(input, skills.len()),
        skill_gaps: job_description
            .map(|jd| skill_gaps(&skills, jd))
            .unwrap_or_default(),
        skills_detected: skills,
    }
}

pub fn score_reasons(input: &ReadinessInput, skill_count: usize) -> Vec<ScoreReason> {
    let mut reasons = Vec::new();
    if input.cgpa >= 8.0 {
        reasons.push(strength(format!(
            "Strong Academic Performance (+{}%)",
            round1(input.cgpa * 1.2)
        )));
    }
    if input.internship {
        reasons.push(strength("Practical Experience from Internship (+15%)"));
    }
    if input.dsa_score >= 7 {
        reasons.push(strength("Competitive DSA Proficiency (+5%)"));
    }
    if skill_count < 3 {
        reasons.push(ScoreReason {
            kind: ReasonKind::Weakness,
            message: "Skill Gap: Add more core technologies (-10%)".to_string(),
        });
    }
    reasons
}

fn strength(message: impl Into<String>) -> ScoreReason {
    ScoreReason {
        kind: ReasonKind::Strength,
        message: message.into(),
    }
}

pub fn competency_levels(input: &ReadinessInput, skill_count: usize) -> Vec<CompetencyLevel> {
    [
        ("CGPA", input.cgpa * 10.0),
        ("Projects", input.projects as f64 * 20.0),
        ("Skills", skill_count as f64 * 20.0),
        ("DSA", input.dsa_score as f64 * 10.0),
    ]
    .into_iter()
    .map(|(metric, score)| CompetencyLevel {
        metric: metric.to_string(),
        score: round1(score),
    })
    .collect()
}

pub fn company_targets(probability: f64) -> Vec<CompanyTarget> {
    COMPANY_TARGETS
        .iter()
        .map(|(company, difficulty)| CompanyTarget {
            company: company.to_string(),
            difficulty: *difficulty,
            match_score: round1((probability / difficulty).clamp(COMPANY_FLOOR, COMPANY_CEILING)),
        })
        .collect()
}

pub fn action_plan(input: &ReadinessInput, skill_count: usize) -> Vec<String> {
    let mut steps = Vec::new();
    if input.dsa_score < 7 {
        steps.push("Practice 2 LeetCode Medium problems daily.".to_string());
    }
    if !input.internship {
        steps.push(
            "Focus on building 1 major Full-Stack project for your portfolio.".to_string(),
        );
    }
    if skill_count < 4 {
        steps.push("Learn and add cloud skills (Azure/AWS) to stay ahead.".to_string());
    }
    steps
}
