//! Issue operations

use tracing::{debug, info};

use crate::{Comment, GitHubClient, Issue, IssueState, NewIssue, RepoName, Result};

impl GitHubClient {
    /// List open issues
    ///
    /// GitHub's issues listing includes pull requests; they are passed
    /// through unfiltered, matching the upstream API.
    pub async fn list_open_issues(&self, repo: &RepoName) -> Result<Vec<Issue>> {
        debug!(repo = %repo, "Listing open issues");

        let issues = self
            .client()
            .issues(repo.owner(), repo.name())
            .list()
            .state(octocrab::params::State::Open)
            .send()
            .await?;

        let result: Vec<Issue> = issues.items.into_iter().map(Issue::from).collect();

        info!(repo = %repo, count = result.len(), "Fetched issues");

        Ok(result)
    }

    /// Create an issue
    pub async fn create_issue(&self, repo: &RepoName, spec: &NewIssue) -> Result<Issue> {
        debug!(repo = %repo, title = %spec.title, "Creating issue");

        let issues = self.client().issues(repo.owner(), repo.name());
        let mut builder = issues
            .create(spec.title.clone())
            .assignees(spec.assignees.clone())
            .labels(spec.labels.clone());
        if let Some(body) = &spec.body {
            builder = builder.body(body.clone());
        }

        let issue = builder.send().await?;

        info!(repo = %repo, number = issue.number, "Created issue");

        Ok(issue.into())
    }

    /// Add a comment to an issue (or, via the issues API, a pull request)
    pub async fn create_issue_comment(
        &self,
        repo: &RepoName,
        number: u64,
        body: &str,
    ) -> Result<Comment> {
        debug!(repo = %repo, number, "Creating issue comment");

        let comment = self
            .client()
            .issues(repo.owner(), repo.name())
            .create_comment(number, body)
            .await?;

        Ok(Comment {
            id: comment.id.0,
            url: comment.html_url.to_string(),
        })
    }

    /// Set an issue's state to open or closed
    pub async fn update_issue_state(
        &self,
        repo: &RepoName,
        number: u64,
        state: IssueState,
    ) -> Result<()> {
        debug!(repo = %repo, number, state = state.as_str(), "Updating issue state");

        self.client()
            .issues(repo.owner(), repo.name())
            .update(number)
            .state(octocrab::models::IssueState::from(state))
            .send()
            .await?;

        info!(repo = %repo, number, state = state.as_str(), "Updated issue state");
        Ok(())
    }
}
