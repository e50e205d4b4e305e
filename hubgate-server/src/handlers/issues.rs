//! Issue endpoints

use axum::extract::{Query, State};
use axum::Json;
use hubgate_github::{IssueState, NewIssue, RepoName};
use serde::{Deserialize, Serialize};

use super::{MessageResponse, RepoQuery};
use crate::error::{ApiError, ResultExt};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct IssueSummary {
    number: u64,
    title: String,
    state: IssueState,
}

#[derive(Debug, Serialize)]
pub struct IssuesResponse {
    issues: Vec<IssueSummary>,
}

/// GET /github/issues
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RepoQuery>,
) -> Result<Json<IssuesResponse>, ApiError> {
    const OP: &str = "list issues";

    let repo = RepoName::parse(&query.repo_name).during(OP)?;
    let issues = state.github.list_open_issues(&repo).await.during(OP)?;

    Ok(Json(IssuesResponse {
        issues: issues
            .into_iter()
            .map(|i| IssueSummary {
                number: i.number,
                title: i.title,
                state: i.state,
            })
            .collect(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CreateIssueRequest {
    repo_name: String,
    title: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    assignees: Vec<String>,
    #[serde(default)]
    labels: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedIssueResponse {
    message: String,
    number: u64,
    url: String,
}

/// POST /github/issue/create
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateIssueRequest>,
) -> Result<Json<CreatedIssueResponse>, ApiError> {
    const OP: &str = "create issue";

    let repo = RepoName::parse(&req.repo_name).during(OP)?;
    let spec = NewIssue {
        title: req.title,
        body: req.body,
        assignees: req.assignees,
        labels: req.labels,
    };
    let issue = state.github.create_issue(&repo, &spec).await.during(OP)?;

    Ok(Json(CreatedIssueResponse {
        message: format!("Issue #{} created", issue.number),
        number: issue.number,
        url: issue.url,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    repo_name: String,
    issue_number: u64,
    comment: String,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    message: String,
    url: String,
}

/// POST /github/issue/comment
pub async fn comment(
    State(state): State<AppState>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    const OP: &str = "comment on issue";

    let repo = RepoName::parse(&req.repo_name).during(OP)?;
    let comment = state
        .github
        .create_issue_comment(&repo, req.issue_number, &req.comment)
        .await
        .during(OP)?;

    Ok(Json(CommentResponse {
        message: format!("Comment added to issue #{}", req.issue_number),
        url: comment.url,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SetStateRequest {
    repo_name: String,
    issue_number: u64,
    /// Only the literals "open" and "closed" deserialize
    state: IssueState,
}

/// POST /github/issue/state
pub async fn set_state(
    State(state): State<AppState>,
    Json(req): Json<SetStateRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    const OP: &str = "set issue state";

    let repo = RepoName::parse(&req.repo_name).during(OP)?;
    state
        .github
        .update_issue_state(&repo, req.issue_number, req.state)
        .await
        .during(OP)?;

    Ok(Json(MessageResponse {
        message: format!("Issue #{} set to {}", req.issue_number, req.state.as_str()),
    }))
}
