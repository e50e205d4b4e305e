//! The capability interface the gateway consumes
//!
//! Handlers hold an `Arc<dyn SourceControl>` rather than the concrete
//! octocrab-backed client, so tests can substitute a fake and count or
//! fail individual capabilities.

use async_trait::async_trait;

use crate::{
    Account, Branch, Comment, Comparison, GitHubClient, Issue, IssueState, NewIssue,
    NewPullRequest, NewRepository, Permission, PullRequest, RateLimitStatus, RepoName, Repository,
    Result, Review, Webhook,
};

/// Read and mutate capabilities on the source-control host
///
/// Each method is one logical remote operation. Implementations must be
/// safe for concurrent use from multiple in-flight requests.
#[async_trait]
pub trait SourceControl: Send + Sync {
    /// Fetch the authenticated account's profile
    async fn current_account(&self) -> Result<Account>;

    /// Fetch the current core API quota window
    async fn rate_limit_status(&self) -> Result<RateLimitStatus>;

    /// List branches with their head commits
    async fn list_branches(&self, repo: &RepoName) -> Result<Vec<Branch>>;

    /// Look up the repository's default branch name
    async fn default_branch(&self, repo: &RepoName) -> Result<String>;

    /// Resolve a branch name to its head commit SHA
    async fn branch_head(&self, repo: &RepoName, branch: &str) -> Result<String>;

    /// Create a branch pointing at the given commit
    async fn create_branch(&self, repo: &RepoName, branch: &str, sha: &str) -> Result<()>;

    /// Delete a branch reference
    async fn delete_branch(&self, repo: &RepoName, branch: &str) -> Result<()>;

    /// Compare `base...head`
    async fn compare_branches(
        &self,
        repo: &RepoName,
        base: &str,
        head: &str,
    ) -> Result<Comparison>;

    /// List open pull requests
    async fn list_open_pull_requests(&self, repo: &RepoName) -> Result<Vec<PullRequest>>;

    /// Open a pull request
    async fn create_pull_request(
        &self,
        repo: &RepoName,
        spec: &NewPullRequest,
    ) -> Result<PullRequest>;

    /// Merge a pull request, optionally with a commit message
    async fn merge_pull_request(
        &self,
        repo: &RepoName,
        number: u64,
        message: Option<&str>,
    ) -> Result<()>;

    /// Close a pull request without merging
    async fn close_pull_request(&self, repo: &RepoName, number: u64) -> Result<()>;

    /// Get all reviews for a pull request
    async fn list_reviews(&self, repo: &RepoName, number: u64) -> Result<Vec<Review>>;

    /// List repositories owned by the authenticated account
    async fn list_repositories(&self) -> Result<Vec<Repository>>;

    /// Read a repository's metadata, including topics
    async fn get_repository(&self, repo: &RepoName) -> Result<Repository>;

    /// Create a repository under the current account or an organization
    async fn create_repository(&self, spec: &NewRepository) -> Result<Repository>;

    /// List open issues
    async fn list_open_issues(&self, repo: &RepoName) -> Result<Vec<Issue>>;

    /// Create an issue
    async fn create_issue(&self, repo: &RepoName, spec: &NewIssue) -> Result<Issue>;

    /// Add a comment to an issue or pull request
    async fn create_issue_comment(
        &self,
        repo: &RepoName,
        number: u64,
        body: &str,
    ) -> Result<Comment>;

    /// Set an issue's state to open or closed
    async fn update_issue_state(
        &self,
        repo: &RepoName,
        number: u64,
        state: IssueState,
    ) -> Result<()>;

    /// List collaborator logins
    async fn list_collaborators(&self, repo: &RepoName) -> Result<Vec<String>>;

    /// Invite a collaborator with the given permission level
    async fn add_collaborator(
        &self,
        repo: &RepoName,
        username: &str,
        permission: Permission,
    ) -> Result<()>;

    /// Revoke a collaborator's access
    async fn remove_collaborator(&self, repo: &RepoName, username: &str) -> Result<()>;

    /// List repository webhooks
    async fn list_webhooks(&self, repo: &RepoName) -> Result<Vec<Webhook>>;

    /// List an organization's team names
    async fn list_teams(&self, org: &str) -> Result<Vec<String>>;
}

#[async_trait]
impl SourceControl for GitHubClient {
    async fn current_account(&self) -> Result<Account> {
        GitHubClient::current_account(self).await
    }

    async fn rate_limit_status(&self) -> Result<RateLimitStatus> {
        GitHubClient::rate_limit_status(self).await
    }

    async fn list_branches(&self, repo: &RepoName) -> Result<Vec<Branch>> {
        GitHubClient::list_branches(self, repo).await
    }

    async fn default_branch(&self, repo: &RepoName) -> Result<String> {
        GitHubClient::default_branch(self, repo).await
    }

    async fn branch_head(&self, repo: &RepoName, branch: &str) -> Result<String> {
        GitHubClient::branch_head(self, repo, branch).await
    }

    async fn create_branch(&self, repo: &RepoName, branch: &str, sha: &str) -> Result<()> {
        GitHubClient::create_branch(self, repo, branch, sha).await
    }

    async fn delete_branch(&self, repo: &RepoName, branch: &str) -> Result<()> {
        GitHubClient::delete_branch(self, repo, branch).await
    }

    async fn compare_branches(
        &self,
        repo: &RepoName,
        base: &str,
        head: &str,
    ) -> Result<Comparison> {
        GitHubClient::compare_branches(self, repo, base, head).await
    }

    async fn list_open_pull_requests(&self, repo: &RepoName) -> Result<Vec<PullRequest>> {
        GitHubClient::list_open_pull_requests(self, repo).await
    }

    async fn create_pull_request(
        &self,
        repo: &RepoName,
        spec: &NewPullRequest,
    ) -> Result<PullRequest> {
        GitHubClient::create_pull_request(self, repo, spec).await
    }

    async fn merge_pull_request(
        &self,
        repo: &RepoName,
        number: u64,
        message: Option<&str>,
    ) -> Result<()> {
        GitHubClient::merge_pull_request(self, repo, number, message).await
    }

    async fn close_pull_request(&self, repo: &RepoName, number: u64) -> Result<()> {
        GitHubClient::close_pull_request(self, repo, number).await
    }

    async fn list_reviews(&self, repo: &RepoName, number: u64) -> Result<Vec<Review>> {
        GitHubClient::list_reviews(self, repo, number).await
    }

    async fn list_repositories(&self) -> Result<Vec<Repository>> {
        GitHubClient::list_repositories(self).await
    }

    async fn get_repository(&self, repo: &RepoName) -> Result<Repository> {
        GitHubClient::get_repository(self, repo).await
    }

    async fn create_repository(&self, spec: &NewRepository) -> Result<Repository> {
        GitHubClient::create_repository(self, spec).await
    }

    async fn list_open_issues(&self, repo: &RepoName) -> Result<Vec<Issue>> {
        GitHubClient::list_open_issues(self, repo).await
    }

    async fn create_issue(&self, repo: &RepoName, spec: &NewIssue) -> Result<Issue> {
        GitHubClient::create_issue(self, repo, spec).await
    }

    async fn create_issue_comment(
        &self,
        repo: &RepoName,
        number: u64,
        body: &str,
    ) -> Result<Comment> {
        GitHubClient::create_issue_comment(self, repo, number, body).await
    }

    async fn update_issue_state(
        &self,
        repo: &RepoName,
        number: u64,
        state: IssueState,
    ) -> Result<()> {
        GitHubClient::update_issue_state(self, repo, number, state).await
    }

    async fn list_collaborators(&self, repo: &RepoName) -> Result<Vec<String>> {
        GitHubClient::list_collaborators(self, repo).await
    }

    async fn add_collaborator(
        &self,
        repo: &RepoName,
        username: &str,
        permission: Permission,
    ) -> Result<()> {
        GitHubClient::add_collaborator(self, repo, username, permission).await
    }

    async fn remove_collaborator(&self, repo: &RepoName, username: &str) -> Result<()> {
        GitHubClient::remove_collaborator(self, repo, username).await
    }

    async fn list_webhooks(&self, repo: &RepoName) -> Result<Vec<Webhook>> {
        GitHubClient::list_webhooks(self, repo).await
    }

    async fn list_teams(&self, org: &str) -> Result<Vec<String>> {
        GitHubClient::list_teams(self, org).await
    }
}
