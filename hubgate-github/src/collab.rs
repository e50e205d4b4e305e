//! Collaborator, webhook and team administration
//!
//! Octocrab has no high-level handlers for these routes, so they go
//! through its typed generic `get`/`_put`/`_delete` REST calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{Error, GitHubClient, Permission, RepoName, Result, Webhook};

impl GitHubClient {
    /// List collaborator logins
    pub async fn list_collaborators(&self, repo: &RepoName) -> Result<Vec<String>> {
        debug!(repo = %repo, "Listing collaborators");

        let route = format!("/repos/{}/{}/collaborators", repo.owner(), repo.name());
        let collaborators: Vec<CollaboratorDto> = self.client().get(route, None::<&()>).await?;

        Ok(collaborators.into_iter().map(|c| c.login).collect())
    }

    /// Invite a collaborator with the given permission level
    pub async fn add_collaborator(
        &self,
        repo: &RepoName,
        username: &str,
        permission: Permission,
    ) -> Result<()> {
        debug!(repo = %repo, username, permission = permission.as_str(), "Adding collaborator");

        let route = format!(
            "/repos/{}/{}/collaborators/{}",
            repo.owner(),
            repo.name(),
            username
        );
        let payload = PermissionPayload {
            permission: permission.as_str(),
        };

        // 201 = invitation created, 204 = already a collaborator
        let response = self.client()._put(route.clone(), Some(&payload)).await?;
        if !response.status().is_success() {
            return Err(Error::UnexpectedStatus {
                status: response.status().as_u16(),
                route,
            });
        }

        info!(repo = %repo, username, "Added collaborator");
        Ok(())
    }

    /// Revoke a collaborator's access
    pub async fn remove_collaborator(&self, repo: &RepoName, username: &str) -> Result<()> {
        debug!(repo = %repo, username, "Removing collaborator");

        let route = format!(
            "/repos/{}/{}/collaborators/{}",
            repo.owner(),
            repo.name(),
            username
        );

        let response = self.client()._delete(route.clone(), None::<&()>).await?;
        if !response.status().is_success() {
            return Err(Error::UnexpectedStatus {
                status: response.status().as_u16(),
                route,
            });
        }

        info!(repo = %repo, username, "Removed collaborator");
        Ok(())
    }

    /// List repository webhooks
    pub async fn list_webhooks(&self, repo: &RepoName) -> Result<Vec<Webhook>> {
        debug!(repo = %repo, "Listing webhooks");

        let route = format!("/repos/{}/{}/hooks", repo.owner(), repo.name());
        let hooks: Vec<HookDto> = self.client().get(route, None::<&()>).await?;

        Ok(hooks
            .into_iter()
            .map(|h| Webhook {
                id: h.id,
                url: h.config.url,
            })
            .collect())
    }

    /// List an organization's team names
    pub async fn list_teams(&self, org: &str) -> Result<Vec<String>> {
        debug!(org, "Listing teams");

        let route = format!("/orgs/{}/teams", org);
        let teams: Vec<TeamDto> = self.client().get(route, None::<&()>).await?;

        Ok(teams.into_iter().map(|t| t.name).collect())
    }
}

#[derive(Debug, Deserialize)]
struct CollaboratorDto {
    login: String,
}

#[derive(Debug, Serialize)]
struct PermissionPayload<'a> {
    permission: &'a str,
}

#[derive(Debug, Deserialize)]
struct HookDto {
    id: u64,
    #[serde(default)]
    config: HookConfigDto,
}

#[derive(Debug, Default, Deserialize)]
struct HookConfigDto {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TeamDto {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_dto_tolerates_missing_config() {
        let parsed: HookDto = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(parsed.id, 7);
        assert!(parsed.config.url.is_none());

        let parsed: HookDto =
            serde_json::from_str(r#"{"id": 8, "config": {"url": "https://example.com/hook"}}"#)
                .unwrap();
        assert_eq!(parsed.config.url.as_deref(), Some("https://example.com/hook"));
    }

    #[test]
    fn test_permission_payload_shape() {
        let json = serde_json::to_value(PermissionPayload { permission: "push" }).unwrap();
        assert_eq!(json["permission"], "push");
    }
}
