//! Branch endpoints

use axum::extract::{Query, State};
use axum::Json;
use hubgate_github::{Comparison, RepoName};
use serde::{Deserialize, Serialize};

use super::{MessageResponse, RepoQuery};
use crate::error::{ApiError, ResultExt};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct BranchesResponse {
    branches: Vec<String>,
}

/// GET /github/branches
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RepoQuery>,
) -> Result<Json<BranchesResponse>, ApiError> {
    const OP: &str = "list branches";

    let repo = RepoName::parse(&query.repo_name).during(OP)?;
    let branches = state.github.list_branches(&repo).await.during(OP)?;

    Ok(Json(BranchesResponse {
        branches: branches.into_iter().map(|b| b.name).collect(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CreateBranchRequest {
    repo_name: String,
    branch_name: String,
    /// Defaults to the repository's default branch
    #[serde(default)]
    base_branch: Option<String>,
}

/// POST /github/branch/create
///
/// Without `base_branch` the repository's default branch is resolved
/// exactly once; a supplied base skips that lookup entirely.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateBranchRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    const OP: &str = "create branch";

    let repo = RepoName::parse(&req.repo_name).during(OP)?;
    let base = match req.base_branch {
        Some(base) => base,
        None => state.github.default_branch(&repo).await.during(OP)?,
    };
    let sha = state.github.branch_head(&repo, &base).await.during(OP)?;
    state
        .github
        .create_branch(&repo, &req.branch_name, &sha)
        .await
        .during(OP)?;

    Ok(Json(MessageResponse {
        message: format!("Branch '{}' created from '{}'", req.branch_name, base),
    }))
}

#[derive(Debug, Deserialize)]
pub struct DeleteBranchRequest {
    repo_name: String,
    branch_name: String,
}

/// POST /github/branch/delete
pub async fn delete(
    State(state): State<AppState>,
    Json(req): Json<DeleteBranchRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    const OP: &str = "delete branch";

    let repo = RepoName::parse(&req.repo_name).during(OP)?;
    state
        .github
        .delete_branch(&repo, &req.branch_name)
        .await
        .during(OP)?;

    Ok(Json(MessageResponse {
        message: format!("Branch '{}' deleted", req.branch_name),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    repo_name: String,
    base: String,
    head: String,
}

/// POST /github/branch/compare
///
/// Ahead/behind counts and the ordered commit SHA list are passed
/// through from the comparison unmodified.
pub async fn compare(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<Comparison>, ApiError> {
    const OP: &str = "compare branches";

    let repo = RepoName::parse(&req.repo_name).during(OP)?;
    let comparison = state
        .github
        .compare_branches(&repo, &req.base, &req.head)
        .await
        .during(OP)?;

    Ok(Json(comparison))
}
