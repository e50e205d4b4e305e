//! Branch and git reference operations

use octocrab::models::repos::Object;
use octocrab::params::repos::Reference;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{Branch, Comparison, Error, GitHubClient, RepoName, Result};

impl GitHubClient {
    /// List branches with their head commits
    pub async fn list_branches(&self, repo: &RepoName) -> Result<Vec<Branch>> {
        debug!(repo = %repo, "Listing branches");

        let branches = self
            .client()
            .repos(repo.owner(), repo.name())
            .list_branches()
            .send()
            .await?;

        let result: Vec<Branch> = branches
            .items
            .into_iter()
            .map(|b| Branch {
                name: b.name,
                sha: b.commit.sha,
            })
            .collect();

        info!(repo = %repo, count = result.len(), "Fetched branches");

        Ok(result)
    }

    /// Look up the repository's default branch name
    pub async fn default_branch(&self, repo: &RepoName) -> Result<String> {
        debug!(repo = %repo, "Resolving default branch");

        let repository = self
            .client()
            .repos(repo.owner(), repo.name())
            .get()
            .await?;

        repository
            .default_branch
            .ok_or_else(|| Error::Parse(format!("Repository {} has no default branch", repo)))
    }

    /// Resolve a branch name to its head commit SHA
    pub async fn branch_head(&self, repo: &RepoName, branch: &str) -> Result<String> {
        debug!(repo = %repo, branch, "Resolving branch head");

        let reference = self
            .client()
            .repos(repo.owner(), repo.name())
            .get_ref(&Reference::Branch(branch.to_string()))
            .await?;

        match reference.object {
            Object::Commit { sha, .. } | Object::Tag { sha, .. } => Ok(sha),
            _ => Err(Error::Parse(format!(
                "Ref {} in {} does not point at a commit",
                branch, repo
            ))),
        }
    }

    /// Create a branch pointing at the given commit
    pub async fn create_branch(&self, repo: &RepoName, branch: &str, sha: &str) -> Result<()> {
        debug!(repo = %repo, branch, sha, "Creating branch");

        self.client()
            .repos(repo.owner(), repo.name())
            .create_ref(&Reference::Branch(branch.to_string()), sha)
            .await?;

        info!(repo = %repo, branch, "Created branch");
        Ok(())
    }

    /// Delete a branch reference
    pub async fn delete_branch(&self, repo: &RepoName, branch: &str) -> Result<()> {
        debug!(repo = %repo, branch, "Deleting branch");

        self.client()
            .repos(repo.owner(), repo.name())
            .delete_ref(&Reference::Branch(branch.to_string()))
            .await?;

        info!(repo = %repo, branch, "Deleted branch");
        Ok(())
    }

    /// Compare `base...head`, reporting ahead/behind counts and commit SHAs
    pub async fn compare_branches(
        &self,
        repo: &RepoName,
        base: &str,
        head: &str,
    ) -> Result<Comparison> {
        debug!(repo = %repo, base, head, "Comparing branches");

        let route = format!(
            "/repos/{}/{}/compare/{}...{}",
            repo.owner(),
            repo.name(),
            base,
            head
        );
        let comparison: CompareResponse = self.client().get(route, None::<&()>).await?;

        Ok(Comparison {
            ahead_by: comparison.ahead_by,
            behind_by: comparison.behind_by,
            commits: comparison.commits.into_iter().map(|c| c.sha).collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct CompareResponse {
    ahead_by: u64,
    behind_by: u64,
    #[serde(default)]
    commits: Vec<CompareCommit>,
}

#[derive(Debug, Deserialize)]
struct CompareCommit {
    sha: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_response_shape() {
        let json = r#"{
            "ahead_by": 2,
            "behind_by": 1,
            "commits": [{"sha": "abc123"}, {"sha": "def456"}]
        }"#;
        let parsed: CompareResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.ahead_by, 2);
        assert_eq!(parsed.behind_by, 1);
        let shas: Vec<String> = parsed.commits.into_iter().map(|c| c.sha).collect();
        assert_eq!(shas, vec!["abc123", "def456"]);
    }
}
