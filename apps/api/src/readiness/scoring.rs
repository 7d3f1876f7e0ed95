use serde::{Deserialize, Serialize};

use crate::resume::pdf::TextStats;

pub const PROBABILITY_FLOOR: f64 = 5.0;
pub const PROBABILITY_CEILING: f64 = 98.0;
pub const QUICK_CEILING: f64 = 98.0;

/// Self-reported academic metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessInput {
    pub cgpa: f64,
    pub internship: bool,
    pub projects: u32,
    #[serde(default = "default_communication")]
    pub communication: u32,
    pub dsa_score: u32,
    #[serde(default = "default_hackathons")]
    pub hackathons: u32,
}

fn default_communication() -> u32 {
    6
}

fn default_hackathons() -> u32 {
    1
}

impl ReadinessInput {
    /// Checks every metric against the ranges the dashboard collects.
    pub fn validate(&self) -> Result<(), String> {
        validate_cgpa(self.cgpa)?;
        validate_projects(self.projects)?;
        check_range("communication", self.communication, 1, 10)?;
        check_range("dsa_score", self.dsa_score, 1, 10)?;
        check_range("hackathons", self.hackathons, 0, 5)
    }
}

pub fn validate_cgpa(cgpa: f64) -> Result<(), String> {
    if (5.0..=10.0).contains(&cgpa) {
        Ok(())
    } else {
        Err(format!("cgpa must be between 5.0 and 10.0, got {cgpa}"))
    }
}

pub fn validate_projects(projects: u32) -> Result<(), String> {
    check_range("projects", projects, 0, 10)
}

fn check_range(name: &str, value: u32, min: u32, max: u32) -> Result<(), String> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(format!("{name} must be between {min} and {max}, got {value}"))
    }
}

/// Placement probability in percent:
/// `4*cgpa + 15*internship + 5*skills + 4*projects + 0.5*dsa`, clamped to [5, 98].
pub fn readiness_probability(input: &ReadinessInput, skill_count: usize) -> f64 {
    let raw = input.cgpa * 4.0
        + internship_value(input.internship) * 15.0
        + skill_count as f64 * 5.0
        + input.projects as f64 * 4.0
        + input.dsa_score as f64 * 0.5;
    round1(raw.clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING))
}

/// Home-page estimate without a resume: `8*cgpa + 15*internship + 5*projects`, capped at 98.
pub fn quick_readiness(cgpa: f64, internship: bool, projects: u32) -> f64 {
    let raw = cgpa * 8.0 + internship_value(internship) * 15.0 + projects as f64 * 5.0;
    round1(raw.clamp(0.0, QUICK_CEILING))
}

/// Resume quality out of 10: length (4), skill coverage (4), quantified numbers (2).
pub fn resume_quality(stats: &TextStats, skill_count: usize) -> f64 {
    let length = (stats.words as f64 / 300.0).min(1.0) * 4.0;
    let coverage = (skill_count as f64 / 5.0).min(1.0) * 4.0;
    let numbers = (stats.digits as f64 / 15.0).min(1.0) * 2.0;
    round1(length + coverage + numbers)
}

fn internship_value(internship: bool) -> f64 {
    if internship {
        1.0
    } else {
        0.0
    }
}

/// One decimal place, exact ties to even. Formatting rounds the exact binary
/// value, so 26.25 becomes 26.2 while 0.15 (stored just under) becomes 0.1.
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(cgpa: f64, internship: bool, projects: u32, dsa: u32) -> ReadinessInput {
        ReadinessInput {
            cgpa,
            internship,
            projects,
            communication: 6,
            dsa_score: dsa,
            hackathons: 1,
        }
    }

    #[test]
    fn test_probability_linear_region() {
        // 7.5*4 + 0 + 2*5 + 2*4 + 5*0.5 = 30 + 10 + 8 + 2.5 = 50.5
        let p = readiness_probability(&input(7.5, false, 2, 5), 2);
        assert!((p - 50.5).abs() < 1e-9, "Score was {p}");
    }

    #[test]
    fn test_probability_capped_at_98() {
        let p = readiness_probability(&input(10.0, true, 10, 10), 10);
        assert_eq!(p, 98.0);
    }

    #[test]
    fn test_probability_stays_within_bounds_across_grid() {
        for cgpa_tenths in 50..=100 {
            let cgpa = cgpa_tenths as f64 / 10.0;
            for internship in [false, true] {
                for projects in 0..=10 {
                    for dsa in 1..=10 {
                        for skills in 0..=10 {
                            let p = readiness_probability(
                                &input(cgpa, internship, projects, dsa),
                                skills,
                            );
                            assert!((PROBABILITY_FLOOR..=PROBABILITY_CEILING).contains(&p));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_probability_monotonic_in_each_input() {
        let base = input(6.0, false, 0, 1);
        let mut prev = readiness_probability(&base, 0);
        for skills in 1..=12 {
            let p = readiness_probability(&base, skills);
            assert!(p >= prev);
            prev = p;
        }

        let mut prev = 0.0;
        for projects in 0..=10 {
            let p = readiness_probability(&input(6.0, false, projects, 1), 0);
            assert!(p >= prev);
            prev = p;
        }

        let mut prev = 0.0;
        for dsa in 1..=10 {
            let p = readiness_probability(&input(6.0, false, 0, dsa), 0);
            assert!(p >= prev);
            prev = p;
        }

        let mut prev = 0.0;
        for cgpa_tenths in 50..=100 {
            let p = readiness_probability(&input(cgpa_tenths as f64 / 10.0, false, 0, 1), 0);
            assert!(p >= prev);
            prev = p;
        }

        let without = readiness_probability(&base, 2);
        let with = readiness_probability(&input(6.0, true, 0, 1), 2);
        assert!(with >= without);
    }

    #[test]
    fn test_quick_readiness_formula() {
        // 7.5*8 + 15 + 2*5 = 60 + 15 + 10 = 85
        assert_eq!(quick_readiness(7.5, true, 2), 85.0);
    }

    #[test]
    fn test_quick_readiness_capped() {
        assert_eq!(quick_readiness(10.0, true, 10), 98.0);
    }

    #[test]
    fn test_resume_quality_full_marks() {
        let stats = TextStats {
            words: 600,
            digits: 40,
            characters: 4000,
        };
        assert_eq!(resume_quality(&stats, 7), 10.0);
    }

    #[test]
    fn test_resume_quality_partial() {
        // 150/300*4 = 2.0, 2/5*4 = 1.6, 3/15*2 = 0.4 -> 4.0
        let stats = TextStats {
            words: 150,
            digits: 3,
            characters: 900,
        };
        assert!((resume_quality(&stats, 2) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate_accepts_dashboard_defaults() {
        assert!(input(7.5, false, 2, 5).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_cgpa_out_of_range() {
        assert!(input(4.9, false, 2, 5).validate().is_err());
        assert!(input(10.1, false, 2, 5).validate().is_err());
        assert!(input(f64::NAN, false, 2, 5).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_dsa_zero() {
        let err = input(7.0, false, 2, 0).validate().unwrap_err();
        assert!(err.contains("dsa_score"));
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(9.600000000000001), 9.6);
        assert_eq!(round1(50.04), 50.0);
    }

    #[test]
    fn test_round1_ties_to_even() {
        assert_eq!(round1(26.25), 26.2);
        assert_eq!(round1(26.75), 26.8);
        assert_eq!(round1(0.15), 0.1);
        assert_eq!(round1(84.5), 84.5);
    }
}
