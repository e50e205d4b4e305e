//! Repository endpoints

use axum::extract::{Query, State};
use axum::Json;
use hubgate_github::{NewRepository, RepoName};
use serde::{Deserialize, Serialize};

use super::RepoQuery;
use crate::error::{ApiError, ResultExt};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct RepositoriesResponse {
    repositories: Vec<String>,
}

/// GET /github/repos
pub async fn list(State(state): State<AppState>) -> Result<Json<RepositoriesResponse>, ApiError> {
    const OP: &str = "list repositories";

    let repos = state.github.list_repositories().await.during(OP)?;

    Ok(Json(RepositoriesResponse {
        repositories: repos.into_iter().map(|r| r.full_name).collect(),
    }))
}

#[derive(Debug, Serialize)]
pub struct RepositoryResponse {
    name: String,
    full_name: String,
    description: Option<String>,
    private: bool,
    topics: Vec<String>,
}

/// GET /github/repo
pub async fn get_one(
    State(state): State<AppState>,
    Query(query): Query<RepoQuery>,
) -> Result<Json<RepositoryResponse>, ApiError> {
    const OP: &str = "fetch repository";

    let repo = RepoName::parse(&query.repo_name).during(OP)?;
    let repository = state.github.get_repository(&repo).await.during(OP)?;

    Ok(Json(RepositoryResponse {
        name: repository.name,
        full_name: repository.full_name,
        description: repository.description,
        private: repository.private,
        topics: repository.topics,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CreateRepositoryRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
    /// Defaults to a public repository
    #[serde(default)]
    private: bool,
    /// Create under this organization instead of the current account
    #[serde(default)]
    org_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedRepositoryResponse {
    message: String,
    url: Option<String>,
}

/// POST /github/repo/create
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateRepositoryRequest>,
) -> Result<Json<CreatedRepositoryResponse>, ApiError> {
    const OP: &str = "create repository";

    let spec = NewRepository {
        name: req.name,
        description: req.description,
        private: req.private,
        organization: req.org_name,
    };
    let repository = state.github.create_repository(&spec).await.during(OP)?;

    Ok(Json(CreatedRepositoryResponse {
        message: format!("Repository '{}' created", repository.full_name),
        url: repository.url,
    }))
}
