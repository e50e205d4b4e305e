//! Transient data types exchanged with the GitHub API
//!
//! Everything here is a per-request DTO; nothing is retained between
//! gateway requests. Conversions from octocrab models live alongside the
//! types so the rest of the crate never leaks octocrab types upward.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A repository identified as `owner/name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoName {
    owner: String,
    name: String,
}

impl RepoName {
    /// Parse a repository reference
    ///
    /// Supports formats:
    /// - owner/repo
    /// - https://github.com/owner/repo
    /// - git@github.com:owner/repo.git
    pub fn parse(input: &str) -> Result<Self> {
        if !input.contains(':') && !input.contains('/') {
            return Err(Error::Parse(format!(
                "Invalid repository format: {}. Expected owner/repo",
                input
            )));
        }

        if !input.contains("://") && !input.contains('@') {
            // Simple owner/repo format
            let parts: Vec<&str> = input.split('/').collect();
            if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
                return Ok(Self {
                    owner: parts[0].to_string(),
                    name: parts[1].trim_end_matches(".git").to_string(),
                });
            }
            return Err(Error::Parse(format!(
                "Invalid repository format: {}. Expected owner/repo",
                input
            )));
        }

        // HTTPS URL: https://github.com/owner/repo
        if input.starts_with("https://") || input.starts_with("http://") {
            let url = url::Url::parse(input).map_err(|e| Error::Parse(e.to_string()))?;
            let path = url.path().trim_start_matches('/').trim_end_matches(".git");
            let parts: Vec<&str> = path.split('/').collect();
            if parts.len() >= 2 {
                return Ok(Self {
                    owner: parts[0].to_string(),
                    name: parts[1].to_string(),
                });
            }
            return Err(Error::Parse(format!("Invalid GitHub URL path: {}", path)));
        }

        // SSH URL: git@github.com:owner/repo.git
        if input.starts_with("git@") {
            if let Some(path) = input.split(':').nth(1) {
                let path = path.trim_end_matches(".git");
                let parts: Vec<&str> = path.split('/').collect();
                if parts.len() >= 2 {
                    return Ok(Self {
                        owner: parts[0].to_string(),
                        name: parts[1].to_string(),
                    });
                }
            }
            return Err(Error::Parse(format!("Invalid SSH URL: {}", input)));
        }

        Err(Error::Parse(format!("Unrecognized URL format: {}", input)))
    }

    /// Repository owner (user or organization)
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name without the owner
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for RepoName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// The authenticated account's profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Login name
    pub login: String,
    /// Display name, if set
    pub name: Option<String>,
    /// Number of public repositories
    #[serde(default)]
    pub public_repos: u64,
}

/// A branch with its head commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name
    pub name: String,
    /// Head commit SHA
    pub sha: String,
}

/// Repository metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Short name
    pub name: String,
    /// `owner/name`
    pub full_name: String,
    /// Description, if set
    pub description: Option<String>,
    /// Whether the repository is private
    pub private: bool,
    /// Repository topics
    pub topics: Vec<String>,
    /// Browser URL
    pub url: Option<String>,
}

impl From<octocrab::models::Repository> for Repository {
    fn from(repo: octocrab::models::Repository) -> Self {
        Repository {
            full_name: repo.full_name.unwrap_or_else(|| repo.name.clone()),
            name: repo.name,
            description: repo.description,
            private: repo.private.unwrap_or(false),
            topics: repo.topics.unwrap_or_default(),
            url: repo.html_url.map(|u| u.to_string()),
        }
    }
}

/// Pull request representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Head branch name
    pub head: String,
    /// Base branch name
    pub base: String,
    /// Browser URL
    pub url: Option<String>,
}

impl From<octocrab::models::pulls::PullRequest> for PullRequest {
    fn from(pr: octocrab::models::pulls::PullRequest) -> Self {
        PullRequest {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            head: pr.head.ref_field,
            base: pr.base.ref_field,
            url: pr.html_url.map(|u| u.to_string()),
        }
    }
}

/// Issue state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

impl From<octocrab::models::IssueState> for IssueState {
    fn from(state: octocrab::models::IssueState) -> Self {
        match state {
            octocrab::models::IssueState::Closed => IssueState::Closed,
            _ => IssueState::Open,
        }
    }
}

impl From<IssueState> for octocrab::models::IssueState {
    fn from(state: IssueState) -> Self {
        match state {
            IssueState::Open => octocrab::models::IssueState::Open,
            IssueState::Closed => octocrab::models::IssueState::Closed,
        }
    }
}

impl IssueState {
    /// The lowercase literal the API uses ("open"/"closed")
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

/// GitHub issue representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number
    pub number: u64,
    /// Issue title
    pub title: String,
    /// Current state (open/closed)
    pub state: IssueState,
    /// Browser URL
    pub url: String,
}

impl From<octocrab::models::issues::Issue> for Issue {
    fn from(issue: octocrab::models::issues::Issue) -> Self {
        Issue {
            number: issue.number,
            title: issue.title,
            state: issue.state.into(),
            url: issue.html_url.to_string(),
        }
    }
}

/// A comment on an issue or pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Comment ID
    pub id: u64,
    /// Browser URL
    pub url: String,
}

/// A pull request review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer login
    pub user: String,
    /// Review state (Approved, ChangesRequested, Commented, ...)
    pub state: String,
    /// Review body/summary
    pub body: Option<String>,
}

/// A repository webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webhook {
    /// Hook ID
    pub id: u64,
    /// Delivery URL, if configured
    pub url: Option<String>,
}

/// Result of comparing two branches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    /// Commits head is ahead of base by
    pub ahead_by: u64,
    /// Commits head is behind base by
    pub behind_by: u64,
    /// SHAs of the commits in the comparison, oldest first
    pub commits: Vec<String>,
}

/// Core API quota window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitStatus {
    /// Requests allowed per window
    pub limit: u64,
    /// Requests remaining in the current window
    pub remaining: u64,
    /// UTC epoch second when the window resets
    pub reset: u64,
}

/// Collaborator permission level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Pull,
    Triage,
    #[default]
    Push,
    Maintain,
    Admin,
}

impl Permission {
    /// The lowercase literal the API expects
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Pull => "pull",
            Permission::Triage => "triage",
            Permission::Push => "push",
            Permission::Maintain => "maintain",
            Permission::Admin => "admin",
        }
    }
}

/// Fields for opening a pull request
#[derive(Debug, Clone)]
pub struct NewPullRequest {
    /// PR title
    pub title: String,
    /// PR body (optional)
    pub body: Option<String>,
    /// Head branch
    pub head: String,
    /// Base branch
    pub base: String,
}

/// Fields for opening an issue
#[derive(Debug, Clone, Default)]
pub struct NewIssue {
    /// Issue title
    pub title: String,
    /// Issue body (optional)
    pub body: Option<String>,
    /// Logins to assign
    pub assignees: Vec<String>,
    /// Labels to attach
    pub labels: Vec<String>,
}

/// Fields for creating a repository
#[derive(Debug, Clone)]
pub struct NewRepository {
    /// Repository name
    pub name: String,
    /// Description (optional)
    pub description: Option<String>,
    /// Create as private (default false)
    pub private: bool,
    /// Create under this organization instead of the current account
    pub organization: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorthand() {
        let repo = RepoName::parse("owner/repo").unwrap();
        assert_eq!(repo.owner(), "owner");
        assert_eq!(repo.name(), "repo");
        assert_eq!(repo.to_string(), "owner/repo");
    }

    #[test]
    fn test_parse_https_url() {
        let repo = RepoName::parse("https://github.com/owner/repo").unwrap();
        assert_eq!(repo.owner(), "owner");
        assert_eq!(repo.name(), "repo");
    }

    #[test]
    fn test_parse_https_url_with_git_suffix() {
        let repo = RepoName::parse("https://github.com/owner/repo.git").unwrap();
        assert_eq!(repo.owner(), "owner");
        assert_eq!(repo.name(), "repo");
    }

    #[test]
    fn test_parse_ssh_url() {
        let repo = RepoName::parse("git@github.com:owner/repo.git").unwrap();
        assert_eq!(repo.owner(), "owner");
        assert_eq!(repo.name(), "repo");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(RepoName::parse("invalid").is_err());
        assert!(RepoName::parse("too/many/parts").is_err());
        assert!(RepoName::parse("/repo").is_err());
    }

    #[test]
    fn test_issue_state_conversion() {
        assert_eq!(
            IssueState::from(octocrab::models::IssueState::Open),
            IssueState::Open
        );
        assert_eq!(
            IssueState::from(octocrab::models::IssueState::Closed),
            IssueState::Closed
        );
    }

    #[test]
    fn test_issue_state_literals() {
        assert_eq!(IssueState::Open.as_str(), "open");
        assert_eq!(IssueState::Closed.as_str(), "closed");
        assert_eq!(
            serde_json::from_str::<IssueState>("\"closed\"").unwrap(),
            IssueState::Closed
        );
        assert!(serde_json::from_str::<IssueState>("\"merged\"").is_err());
    }

    #[test]
    fn test_permission_default_is_push() {
        assert_eq!(Permission::default(), Permission::Push);
        assert_eq!(Permission::default().as_str(), "push");
    }
}
