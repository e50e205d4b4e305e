//! Repository listing, metadata and creation

use serde::Serialize;
use tracing::{debug, info};

use crate::{GitHubClient, NewRepository, RepoName, Repository, Result};

impl GitHubClient {
    /// List repositories owned by the authenticated account
    pub async fn list_repositories(&self) -> Result<Vec<Repository>> {
        debug!("Listing repositories for authenticated account");

        let repos = self
            .client()
            .current()
            .list_repos_for_authenticated_user()
            .send()
            .await?;

        let result: Vec<Repository> = repos.items.into_iter().map(Repository::from).collect();

        info!(count = result.len(), "Fetched repositories");

        Ok(result)
    }

    /// Read a repository's metadata, including topics
    pub async fn get_repository(&self, repo: &RepoName) -> Result<Repository> {
        debug!(repo = %repo, "Fetching repository");

        let repository = self
            .client()
            .repos(repo.owner(), repo.name())
            .get()
            .await?;

        Ok(repository.into())
    }

    /// Create a repository under the current account or an organization
    ///
    /// Routes to `/orgs/{org}/repos` when `spec.organization` is set and to
    /// `/user/repos` otherwise; never both.
    pub async fn create_repository(&self, spec: &NewRepository) -> Result<Repository> {
        let payload = CreateRepoPayload {
            name: &spec.name,
            description: spec.description.as_deref(),
            private: spec.private,
        };

        let route = match &spec.organization {
            Some(org) => format!("/orgs/{}/repos", org),
            None => "/user/repos".to_string(),
        };

        debug!(name = %spec.name, route = %route, "Creating repository");

        let repository: octocrab::models::Repository =
            self.client().post(route, Some(&payload)).await?;

        info!(name = %spec.name, "Created repository");

        Ok(repository.into())
    }
}

#[derive(Debug, Serialize)]
struct CreateRepoPayload<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    private: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_repo_payload_omits_empty_description() {
        let payload = CreateRepoPayload {
            name: "demo",
            description: None,
            private: false,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "demo");
        assert_eq!(json["private"], false);
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_create_repo_payload_with_description() {
        let payload = CreateRepoPayload {
            name: "demo",
            description: Some("a demo"),
            private: true,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["description"], "a demo");
        assert_eq!(json["private"], true);
    }
}
