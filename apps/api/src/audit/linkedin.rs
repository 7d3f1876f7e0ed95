//! LinkedIn profile checklist scoring.

use serde::{Deserialize, Serialize};

const SCORE_CUSTOM_URL: u32 = 10;
const SCORE_HEADLINE: u32 = 20;
const SCORE_ABOUT: u32 = 15;
const SCORE_CONNECTIONS_HIGH: u32 = 20;
const SCORE_CONNECTIONS_MID: u32 = 10;
const SCORE_FEATURED: u32 = 15;
const SCORE_RECOMMENDATIONS: u32 = 10;
const SCORE_PHOTO: u32 = 10;

const CONNECTIONS_HIGH: u32 = 500;
const CONNECTIONS_MID: u32 = 150;

pub const LINKEDIN_POST_TEMPLATE: &str = "Excited to share my latest project: PlacementIQ! 🚀\n\
I just built an AI platform to help students crack placements.\n\
Let me know what you think in the comments! 👇\n\
#Coding #Placement #Tech";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadlineStyle {
    /// "Student at XYZ College"
    CurrentTitle,
    /// "B.Tech CSE | Python | React"
    TitleWithSkills,
    /// "Building Scalable Systems | Incoming SDE"
    ValueProposition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedInProfile {
    #[serde(default)]
    pub profile_url: String,
    pub custom_url: bool,
    pub headline: HeadlineStyle,
    pub has_about: bool,
    pub connections: u32,
    pub has_featured: bool,
    pub has_recommendations: bool,
    pub has_photo_and_banner: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileTier {
    AllStar,
    Good,
    ActionNeeded,
}

impl ProfileTier {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 85 => ProfileTier::AllStar,
            s if s >= 60 => ProfileTier::Good,
            _ => ProfileTier::ActionNeeded,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTier::AllStar => "All-Star Profile!",
            ProfileTier::Good => "Good Profile.",
            ProfileTier::ActionNeeded => "Action Needed.",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedInAudit {
    pub candidate: String,
    pub score: u32,
    pub max_score: u32,
    pub tier: ProfileTier,
    pub tier_label: String,
    pub improvements: Vec<String>,
    pub suggested_post: String,
}

pub fn audit_profile(profile: &LinkedInProfile) -> LinkedInAudit {
    let mut score = 0;
    let mut improvements = Vec::new();

    if profile.custom_url {
        score += SCORE_CUSTOM_URL;
    } else {
        improvements.push("Customize your URL to make it clean and professional.".to_string());
    }

    match profile.headline {
        HeadlineStyle::TitleWithSkills | HeadlineStyle::ValueProposition => {
            score += SCORE_HEADLINE
        }
        HeadlineStyle::CurrentTitle => improvements
            .push("Update your headline to include your target role and top skills.".to_string()),
    }

    if profile.has_about {
        score += SCORE_ABOUT;
    } else {
        improvements.push("Write a detailed 'About' section highlighting your journey.".to_string());
    }

    if profile.connections >= CONNECTIONS_HIGH {
        score += SCORE_CONNECTIONS_HIGH;
    } else if profile.connections >= CONNECTIONS_MID {
        score += SCORE_CONNECTIONS_MID;
    } else {
        improvements.push(format!(
            "Grow your network. You currently have {}, aim for 500+.",
            profile.connections
        ));
    }

    if profile.has_featured {
        score += SCORE_FEATURED;
    } else {
        improvements.push("Pin your best GitHub repos to your 'Featured' section.".to_string());
    }

    if profile.has_recommendations {
        score += SCORE_RECOMMENDATIONS;
    } else {
        improvements.push("Ask for written recommendations.".to_string());
    }

    if profile.has_photo_and_banner {
        score += SCORE_PHOTO;
    } else {
        improvements.push("Add a professional headshot and banner.".to_string());
    }

    let tier = ProfileTier::from_score(score);
    LinkedInAudit {
        candidate: candidate_handle(&profile.profile_url),
        score,
        max_score: max_score(),
        tier,
        tier_label: tier.label().to_string(),
        improvements,
        suggested_post: LINKEDIN_POST_TEMPLATE.to_string(),
    }
}

pub fn max_score() -> u32 {
    SCORE_CUSTOM_URL
        + SCORE_HEADLINE
        + SCORE_ABOUT
        + SCORE_CONNECTIONS_HIGH
        + SCORE_FEATURED
        + SCORE_RECOMMENDATIONS
        + SCORE_PHOTO
}

/// Last non-empty path segment of the profile URL, or "User".
pub fn candidate_handle(url: &str) -> String {
    url.trim()
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .split('/')
        .filter(|seg| !seg.is_empty())
        .last()
        .map(str::to_string)
        .unwrap_or_else(|| "User".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_profile() -> LinkedInProfile {
        LinkedInProfile {
            profile_url: "https://www.linkedin.com/in/jane-doe/".to_string(),
            custom_url: true,
            headline: HeadlineStyle::ValueProposition,
            has_about: true,
            connections: 800,
            has_featured: true,
            has_recommendations: true,
            has_photo_and_banner: true,
        }
    }

    #[test]
    fn test_max_score_is_100() {
        assert_eq!(max_score(), 100);
    }

    #[test]
    fn test_complete_profile_scores_100() {
        let audit = audit_profile(&complete_profile());
        assert_eq!(audit.score, 100);
        assert_eq!(audit.tier, ProfileTier::AllStar);
        assert!(audit.improvements.is_empty());
        assert_eq!(audit.candidate, "jane-doe");
    }

    #[test]
    fn test_empty_profile_scores_zero_with_seven_fixes() {
        let profile = LinkedInProfile {
            profile_url: String::new(),
            custom_url: false,
            headline: HeadlineStyle::CurrentTitle,
            has_about: false,
            connections: 40,
            has_featured: false,
            has_recommendations: false,
            has_photo_and_banner: false,
        };
        let audit = audit_profile(&profile);
        assert_eq!(audit.score, 0);
        assert_eq!(audit.improvements.len(), 7);
        assert!(audit.improvements.iter().any(|i| i.contains("You currently have 40")));
        assert_eq!(audit.tier, ProfileTier::ActionNeeded);
        assert_eq!(audit.candidate, "User");
    }

    #[test]
    fn test_mid_connections_get_partial_credit() {
        let mut profile = complete_profile();
        profile.connections = 150;
        let audit = audit_profile(&profile);
        assert_eq!(audit.score, 90);
        assert!(audit.improvements.is_empty());
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(ProfileTier::from_score(85), ProfileTier::AllStar);
        assert_eq!(ProfileTier::from_score(84), ProfileTier::Good);
        assert_eq!(ProfileTier::from_score(60), ProfileTier::Good);
        assert_eq!(ProfileTier::from_score(59), ProfileTier::ActionNeeded);
    }

    #[test]
    fn test_title_only_headline_loses_20() {
        let mut profile = complete_profile();
        profile.headline = HeadlineStyle::CurrentTitle;
        assert_eq!(audit_profile(&profile).score, 80);
    }

    #[test]
    fn test_candidate_handle_variants() {
        assert_eq!(candidate_handle("linkedin.com/in/yourname"), "yourname");
        assert_eq!(candidate_handle("linkedin.com/in/yourname?trk=x"), "yourname");
        assert_eq!(candidate_handle("   "), "User");
    }

    #[test]
    fn test_headline_serde() {
        let h: HeadlineStyle = serde_json::from_str(r#""title_with_skills""#).unwrap();
        assert_eq!(h, HeadlineStyle::TitleWithSkills);
    }
}
