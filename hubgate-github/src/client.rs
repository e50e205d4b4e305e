//! GitHub API client using octocrab

use std::time::Duration;

use octocrab::Octocrab;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{Account, Error, RateLimitStatus, Result};

/// Uniform timeout applied to every outbound call
const CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated GitHub API client
///
/// Created once at startup and shared read-only by every in-flight
/// request. All repository-scoped operations take the repository as an
/// argument rather than binding the client to a single repository.
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Create a client from the `GITHUB_TOKEN` environment variable
    ///
    /// A missing token is an error here so the process can refuse to start
    /// rather than failing on the first request.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN")
            .map_err(|_| Error::MissingEnv("GITHUB_TOKEN".to_string()))?;
        Self::from_token(token)
    }

    /// Create a client from an explicit personal access token
    pub fn from_token(token: impl Into<String>) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.into())
            .set_connect_timeout(Some(CALL_TIMEOUT))
            .set_read_timeout(Some(CALL_TIMEOUT))
            .build()
            .map_err(|e| Error::Auth(format!("Failed to create GitHub client: {}", e)))?;

        info!("Created GitHub client");

        Ok(Self { client })
    }

    /// Get the underlying octocrab client
    pub(crate) fn client(&self) -> &Octocrab {
        &self.client
    }

    /// Fetch the authenticated account's profile
    pub async fn current_account(&self) -> Result<Account> {
        debug!("Fetching authenticated account");

        let account: Account = self.client.get("/user", None::<&()>).await?;

        info!(login = %account.login, "Fetched authenticated account");
        Ok(account)
    }

    /// Fetch the current core API quota window
    pub async fn rate_limit_status(&self) -> Result<RateLimitStatus> {
        debug!("Fetching rate limit status");

        let response: RateLimitResponse = self.client.get("/rate_limit", None::<&()>).await?;

        Ok(response.resources.core)
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient").finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct RateLimitResponse {
    resources: RateLimitResources,
}

#[derive(Debug, Deserialize)]
struct RateLimitResources {
    core: RateLimitStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_requires_token() {
        // Isolate from any ambient token by clearing within this test only
        // if it is unset; with a token present the constructor must succeed.
        match std::env::var("GITHUB_TOKEN") {
            Ok(_) => assert!(GitHubClient::from_env().is_ok()),
            Err(_) => {
                let err = GitHubClient::from_env().unwrap_err();
                assert!(matches!(err, Error::MissingEnv(_)));
            }
        }
    }

    #[test]
    fn test_rate_limit_response_shape() {
        let json = r#"{"resources":{"core":{"limit":5000,"remaining":4999,"reset":1730000000,"used":1}}}"#;
        let parsed: RateLimitResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.resources.core.limit, 5000);
        assert_eq!(parsed.resources.core.remaining, 4999);
        assert_eq!(parsed.resources.core.reset, 1_730_000_000);
    }
}
