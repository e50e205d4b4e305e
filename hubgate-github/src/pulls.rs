//! Pull request operations

use tracing::{debug, info};

use crate::{GitHubClient, NewPullRequest, PullRequest, RepoName, Result, Review};

impl GitHubClient {
    /// List open pull requests
    pub async fn list_open_pull_requests(&self, repo: &RepoName) -> Result<Vec<PullRequest>> {
        debug!(repo = %repo, "Listing open pull requests");

        let pulls = self
            .client()
            .pulls(repo.owner(), repo.name())
            .list()
            .state(octocrab::params::State::Open)
            .send()
            .await?;

        let result: Vec<PullRequest> = pulls.items.into_iter().map(PullRequest::from).collect();

        info!(repo = %repo, count = result.len(), "Fetched pull requests");

        Ok(result)
    }

    /// Open a pull request
    pub async fn create_pull_request(
        &self,
        repo: &RepoName,
        spec: &NewPullRequest,
    ) -> Result<PullRequest> {
        debug!(repo = %repo, head = %spec.head, base = %spec.base, "Creating pull request");

        let pulls = self.client().pulls(repo.owner(), repo.name());
        let mut builder = pulls.create(spec.title.clone(), spec.head.clone(), spec.base.clone());
        if let Some(body) = &spec.body {
            builder = builder.body(body.clone());
        }

        let pr = builder.send().await?;

        info!(repo = %repo, number = pr.number, "Created pull request");

        Ok(pr.into())
    }

    /// Merge a pull request, optionally with a commit message
    pub async fn merge_pull_request(
        &self,
        repo: &RepoName,
        number: u64,
        message: Option<&str>,
    ) -> Result<()> {
        debug!(repo = %repo, number, "Merging pull request");

        let pulls = self.client().pulls(repo.owner(), repo.name());
        let mut builder = pulls.merge(number);
        if let Some(message) = message {
            builder = builder.message(message);
        }

        builder.send().await?;

        info!(repo = %repo, number, "Merged pull request");
        Ok(())
    }

    /// Close a pull request without merging
    pub async fn close_pull_request(&self, repo: &RepoName, number: u64) -> Result<()> {
        debug!(repo = %repo, number, "Closing pull request");

        self.client()
            .pulls(repo.owner(), repo.name())
            .update(number)
            .state(octocrab::params::pulls::State::Closed)
            .send()
            .await?;

        info!(repo = %repo, number, "Closed pull request");
        Ok(())
    }

    /// Get all reviews for a pull request
    pub async fn list_reviews(&self, repo: &RepoName, number: u64) -> Result<Vec<Review>> {
        debug!(repo = %repo, number, "Listing pull request reviews");

        let reviews = self
            .client()
            .pulls(repo.owner(), repo.name())
            .list_reviews(number)
            .send()
            .await?;

        Ok(reviews
            .items
            .into_iter()
            .map(|r| Review {
                user: r.user.map(|u| u.login).unwrap_or_default(),
                state: r
                    .state
                    .map(|s| format!("{:?}", s))
                    .unwrap_or_else(|| "UNKNOWN".to_string()),
                body: r.body,
            })
            .collect())
    }
}
