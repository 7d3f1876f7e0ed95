//! GitHub portfolio audit: language breakdown of a user's public repositories.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

const USER_AGENT: &str = concat!("placementiq/", env!("CARGO_PKG_VERSION"));
const REPOS_PER_PAGE: u32 = 100;
const MIN_PORTFOLIO_REPOS: usize = 5;
const TOP_LANGUAGES: usize = 3;
const MAX_USERNAME_LEN: usize = 39;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub user not found")]
    NotFound,

    #[error("GitHub API rate limit reached")]
    RateLimited,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API returned status {0}")]
    Status(u16),
}

/// The only repository fields the audit reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// Source of a user's public repositories. `GitHubClient` in production.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>, GitHubError>;
}

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(base_url: String, token: Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>, GitHubError> {
        let mut request = self
            .client
            .get(format!("{}/users/{}/repos", self.base_url, username))
            .query(&[("per_page", REPOS_PER_PAGE)])
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if let Err(e) = map_status(response.status()) {
            warn!("GitHub API request for user {username} failed: {e}");
            return Err(e);
        }
        Ok(response.json().await?)
    }
}

/// 404 means the user does not exist. GitHub answers 403 or 429 once the
/// unauthenticated quota is spent.
fn map_status(status: StatusCode) -> Result<(), GitHubError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::NOT_FOUND => Err(GitHubError::NotFound),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Err(GitHubError::RateLimited),
        other => Err(GitHubError::Status(other.as_u16())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub language: String,
    pub repositories: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubAudit {
    pub username: String,
    pub total_repositories: usize,
    pub languages: Vec<LanguageCount>,
    pub top_languages: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub next_step: String,
}

/// GitHub logins: 1-39 ASCII alphanumerics or hyphens.
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= MAX_USERNAME_LEN
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Repositories per language, most used first. Ties keep first-seen order.
pub fn language_stats(repos: &[Repository]) -> Vec<LanguageCount> {
    let mut stats: Vec<LanguageCount> = Vec::new();
    for lang in repos.iter().filter_map(|r| r.language.as_deref()) {
        match stats.iter_mut().find(|s| s.language == lang) {
            Some(entry) => entry.repositories += 1,
            None => stats.push(LanguageCount {
                language: lang.to_string(),
                repositories: 1,
            }),
        }
    }
    // stable sort keeps insertion order among equal counts
    stats.sort_by(|a, b| b.repositories.cmp(&a.repositories));
    stats
}

pub fn build_audit(username: &str, repos: &[Repository]) -> GitHubAudit {
    let languages = language_stats(repos);
    let top_languages: Vec<String> = languages
        .iter()
        .take(TOP_LANGUAGES)
        .map(|l| l.language.clone())
        .collect();
    let total = repos.len();

    let stack = if top_languages.is_empty() {
        "N/A".to_string()
    } else {
        top_languages.join(", ")
    };
    let strengths = vec![
        format!("Top Tech Stack: {stack}"),
        format!("Project Count: {total} repositories"),
        "Activity: Active public profile".to_string(),
    ];

    let mut improvements = Vec::new();
    if total < MIN_PORTFOLIO_REPOS {
        improvements.push("Portfolio Size: Under 5 repos. Build more projects!".to_string());
    }
    improvements.push("Documentation: Ensure all top repos have a README.md.".to_string());
    improvements.push("Diversity: Try contributing to open-source.".to_string());

    let strongest = top_languages.first().map(String::as_str).unwrap_or("Coding");
    let next_step = format!(
        "Your strongest language is {strongest}. Mention this prominently on your resume!"
    );

    GitHubAudit {
        username: username.to_string(),
        total_repositories: total,
        languages,
        top_languages,
        strengths,
        improvements,
        next_step,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        extract::{Path, Query},
        http::{HeaderMap, StatusCode as HttpStatus},
        routing::get,
        Json, Router,
    };
    use serde_json::{json, Value};

    use super::*;
    use crate::test_support::serve_locally;

    /// Fake GitHub: a few reserved logins answer with error statuses, every
    /// other login gets two repos provided the query and token are right.
    async fn fake_repos(
        Path(user): Path<String>,
        Query(params): Query<HashMap<String, String>>,
        headers: HeaderMap,
    ) -> (HttpStatus, Json<Value>) {
        match user.as_str() {
            "ghost" => return (HttpStatus::NOT_FOUND, Json(json!({"message": "Not Found"}))),
            "throttled" => return (HttpStatus::FORBIDDEN, Json(json!({"message": "rate limit"}))),
            "flaky" => return (HttpStatus::BAD_GATEWAY, Json(json!({}))),
            _ => {}
        }
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if params.get("per_page").map(String::as_str) != Some("100") || auth != "Bearer gh-token" {
            return (HttpStatus::BAD_REQUEST, Json(json!({"message": "bad request"})));
        }
        (
            HttpStatus::OK,
            Json(json!([
                {"name": "api", "language": "Rust", "stargazers_count": 3},
                {"name": "notes", "language": null}
            ])),
        )
    }

    async fn fake_client(token: Option<&str>) -> GitHubClient {
        let base = serve_locally(Router::new().route("/users/:user/repos", get(fake_repos))).await;
        GitHubClient::new(base, token.map(str::to_string)).unwrap()
    }

    fn repo(name: &str, language: Option<&str>) -> Repository {
        Repository {
            name: name.to_string(),
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn test_language_stats_sorted_by_count() {
        let repos = vec![
            repo("a", Some("Rust")),
            repo("b", Some("Python")),
            repo("c", Some("Python")),
            repo("d", None),
            repo("e", Some("Go")),
            repo("f", Some("Python")),
        ];
        let stats = language_stats(&repos);
        assert_eq!(stats[0].language, "Python");
        assert_eq!(stats[0].repositories, 3);
        // Rust and Go tie; Rust was seen first
        assert_eq!(stats[1].language, "Rust");
        assert_eq!(stats[2].language, "Go");
    }

    #[test]
    fn test_language_stats_ignores_null_languages() {
        let stats = language_stats(&[repo("a", None), repo("b", None)]);
        assert!(stats.is_empty());
    }

    #[test]
    fn test_small_portfolio_audit() {
        let repos = vec![repo("a", Some("Java")), repo("b", None)];
        let audit = build_audit("octo", &repos);
        assert_eq!(audit.total_repositories, 2);
        assert_eq!(audit.top_languages, vec!["Java"]);
        assert_eq!(audit.improvements.len(), 3);
        assert!(audit.improvements[0].contains("Under 5 repos"));
        assert!(audit.next_step.contains("Java"));
    }

    #[test]
    fn test_empty_portfolio_falls_back_to_coding() {
        let audit = build_audit("ghost", &[]);
        assert_eq!(audit.strengths[0], "Top Tech Stack: N/A");
        assert!(audit.next_step.contains("Coding"));
    }

    #[test]
    fn test_top_languages_limited_to_three() {
        let repos: Vec<_> = ["C", "Go", "Rust", "Zig", "C"]
            .iter()
            .enumerate()
            .map(|(i, l)| repo(&i.to_string(), Some(*l)))
            .collect();
        let audit = build_audit("many", &repos);
        assert_eq!(audit.top_languages, vec!["C", "Go", "Rust"]);
        assert_eq!(audit.improvements.len(), 2);
    }

    #[test]
    fn test_username_validation() {
        assert!(is_valid_username("torvalds"));
        assert!(is_valid_username("jane-doe-42"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("../etc/passwd"));
        assert!(!is_valid_username(&"a".repeat(40)));
    }

    #[test]
    fn test_repository_deserializes_from_api_shape() {
        let body = r#"[{"id": 1, "name": "linux", "language": "C", "stargazers_count": 9}]"#;
        let repos: Vec<Repository> = serde_json::from_str(body).unwrap();
        assert_eq!(repos[0].language.as_deref(), Some("C"));
    }

    #[test]
    fn test_map_status() {
        assert!(map_status(StatusCode::OK).is_ok());
        assert!(matches!(map_status(StatusCode::NOT_FOUND), Err(GitHubError::NotFound)));
        assert!(matches!(map_status(StatusCode::FORBIDDEN), Err(GitHubError::RateLimited)));
        assert!(matches!(
            map_status(StatusCode::TOO_MANY_REQUESTS),
            Err(GitHubError::RateLimited)
        ));
        assert!(matches!(
            map_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(GitHubError::Status(500))
        ));
    }

    #[tokio::test]
    async fn test_client_sends_page_size_and_token() {
        let client = fake_client(Some("gh-token")).await;
        let repos = client.list_repositories("octocat").await.unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].language.as_deref(), Some("Rust"));
        assert_eq!(repos[1].language, None);
    }

    #[tokio::test]
    async fn test_client_without_token_is_rejected_by_fake() {
        let client = fake_client(None).await;
        let err = client.list_repositories("octocat").await.unwrap_err();
        assert!(matches!(err, GitHubError::Status(400)));
    }

    #[tokio::test]
    async fn test_client_maps_error_statuses() {
        let client = fake_client(Some("gh-token")).await;
        assert!(matches!(
            client.list_repositories("ghost").await,
            Err(GitHubError::NotFound)
        ));
        assert!(matches!(
            client.list_repositories("throttled").await,
            Err(GitHubError::RateLimited)
        ));
        assert!(matches!(
            client.list_repositories("flaky").await,
            Err(GitHubError::Status(502))
        ));
    }
}
