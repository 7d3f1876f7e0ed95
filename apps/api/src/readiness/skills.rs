//! Keyword-to-skill dictionary and resume skill detection.
//!
//! Matching is a case-insensitive substring search: a skill is detected when
//! any of its keywords occurs anywhere in the text. Short keywords such as
//! `ml` or `js` therefore also fire inside longer words; the readiness
//! formulas were tuned against exactly this behaviour.

/// Ordered skill table: `(skill, keywords)`.
pub const SKILLS_DB: &[(&str, &[&str])] = &[
    ("python", &["python"]),
    ("sql", &["sql", "mysql", "postgresql"]),
    ("machine learning", &["machine learning", "ml", "tensorflow"]),
    ("data analysis", &["data analysis", "pandas", "numpy"]),
    ("git", &["git", "github"]),
    ("java", &["java", "spring"]),
    ("react", &["react", "nextjs"]),
    ("docker", &["docker", "containers"]),
    ("c++", &["c++", "cpp"]),
    ("javascript", &["javascript", "js", "node"]),
];

/// Returns every dictionary skill mentioned in `text`, in table order.
pub fn extract_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    SKILLS_DB
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(skill, _)| skill.to_string())
        .collect()
}

/// Skills the job description asks for that the resume never mentions.
pub fn skill_gaps(resume_skills: &[String], job_description: &str) -> Vec<String> {
    extract_skills(job_description)
        .into_iter()
        .filter(|skill| !resume_skills.contains(skill))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_table_order() {
        let skills = extract_skills("Experienced in PostgreSQL, Docker and React");
        assert_eq!(skills, vec!["sql", "react", "docker"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(extract_skills("PYTHON"), vec!["python"]);
    }

    #[test]
    fn test_each_skill_reported_once() {
        let skills = extract_skills("mysql sql postgresql");
        assert_eq!(skills, vec!["sql"]);
    }

    #[test]
    fn test_short_keyword_matches_inside_words() {
        // "html" contains "ml"
        assert_eq!(extract_skills("HTML"), vec!["machine learning"]);
    }

    #[test]
    fn test_no_skills_in_plain_prose() {
        assert!(extract_skills("I enjoy hiking and reading.").is_empty());
    }

    #[test]
    fn test_cpp_symbol_keyword() {
        assert_eq!(extract_skills("Competitive C++"), vec!["c++"]);
    }

    #[test]
    fn test_skill_gaps_lists_only_missing() {
        let resume = extract_skills("Python and SQL");
        let gaps = skill_gaps(&resume, "Requires Python, Docker and Kubernetes containers");
        assert_eq!(gaps, vec!["docker"]);
    }

    #[test]
    fn test_skill_gaps_empty_jd() {
        assert!(skill_gaps(&["python".to_string()], "").is_empty());
    }
}
