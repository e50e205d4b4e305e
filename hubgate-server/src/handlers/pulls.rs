//! Pull request endpoints

use axum::extract::{Query, State};
use axum::Json;
use hubgate_github::{NewPullRequest, RepoName, Review};
use serde::{Deserialize, Serialize};

use super::{MessageResponse, RepoQuery};
use crate::error::{ApiError, ResultExt};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct PullRequestSummary {
    id: u64,
    title: String,
    head: String,
    base: String,
}

#[derive(Debug, Serialize)]
pub struct PullRequestsResponse {
    pull_requests: Vec<PullRequestSummary>,
}

/// GET /github/pull-requests
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RepoQuery>,
) -> Result<Json<PullRequestsResponse>, ApiError> {
    const OP: &str = "list pull requests";

    let repo = RepoName::parse(&query.repo_name).during(OP)?;
    let pulls = state.github.list_open_pull_requests(&repo).await.during(OP)?;

    Ok(Json(PullRequestsResponse {
        pull_requests: pulls
            .into_iter()
            .map(|pr| PullRequestSummary {
                id: pr.number,
                title: pr.title,
                head: pr.head,
                base: pr.base,
            })
            .collect(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CreatePullRequestRequest {
    repo_name: String,
    title: String,
    #[serde(default)]
    body: Option<String>,
    head: String,
    base: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    message: String,
    url: Option<String>,
}

/// POST /github/pull-request/create
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreatePullRequestRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    const OP: &str = "create pull request";

    let repo = RepoName::parse(&req.repo_name).during(OP)?;
    let spec = NewPullRequest {
        title: req.title,
        body: req.body,
        head: req.head,
        base: req.base,
    };
    let pr = state.github.create_pull_request(&repo, &spec).await.during(OP)?;

    Ok(Json(CreatedResponse {
        message: format!("Pull request #{} created", pr.number),
        url: pr.url,
    }))
}

#[derive(Debug, Deserialize)]
pub struct MergeRequest {
    repo_name: String,
    pr_number: u64,
    #[serde(default)]
    commit_message: Option<String>,
}

/// POST /github/pr/merge
pub async fn merge(
    State(state): State<AppState>,
    Json(req): Json<MergeRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    const OP: &str = "merge pull request";

    let repo = RepoName::parse(&req.repo_name).during(OP)?;
    state
        .github
        .merge_pull_request(&repo, req.pr_number, req.commit_message.as_deref())
        .await
        .during(OP)?;

    Ok(Json(MessageResponse {
        message: format!("Pull request #{} merged", req.pr_number),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CloseRequest {
    repo_name: String,
    pr_number: u64,
}

/// POST /github/pr/close
pub async fn close(
    State(state): State<AppState>,
    Json(req): Json<CloseRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    const OP: &str = "close pull request";

    let repo = RepoName::parse(&req.repo_name).during(OP)?;
    state
        .github
        .close_pull_request(&repo, req.pr_number)
        .await
        .during(OP)?;

    Ok(Json(MessageResponse {
        message: format!("Pull request #{} closed", req.pr_number),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    repo_name: String,
    pr_number: u64,
    comment: String,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    message: String,
    url: String,
}

/// POST /github/pr/comment
///
/// Pull request conversation comments go through the issues API, same as
/// issue comments.
pub async fn comment(
    State(state): State<AppState>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    const OP: &str = "comment on pull request";

    let repo = RepoName::parse(&req.repo_name).during(OP)?;
    let comment = state
        .github
        .create_issue_comment(&repo, req.pr_number, &req.comment)
        .await
        .during(OP)?;

    Ok(Json(CommentResponse {
        message: format!("Comment added to pull request #{}", req.pr_number),
        url: comment.url,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ReviewsQuery {
    repo_name: String,
    pr_number: u64,
}

#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    reviews: Vec<Review>,
}

/// GET /github/pr/reviews
pub async fn reviews(
    State(state): State<AppState>,
    Query(query): Query<ReviewsQuery>,
) -> Result<Json<ReviewsResponse>, ApiError> {
    const OP: &str = "list pull request reviews";

    let repo = RepoName::parse(&query.repo_name).during(OP)?;
    let reviews = state
        .github
        .list_reviews(&repo, query.pr_number)
        .await
        .during(OP)?;

    Ok(Json(ReviewsResponse { reviews }))
}
