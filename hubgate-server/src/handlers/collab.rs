//! Collaborator, webhook and team endpoints

use axum::extract::{Query, State};
use axum::Json;
use hubgate_github::{Permission, RepoName, Webhook};
use serde::{Deserialize, Serialize};

use super::{MessageResponse, RepoQuery};
use crate::error::{ApiError, ResultExt};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct CollaboratorsResponse {
    collaborators: Vec<String>,
}

/// GET /github/collaborators
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RepoQuery>,
) -> Result<Json<CollaboratorsResponse>, ApiError> {
    const OP: &str = "list collaborators";

    let repo = RepoName::parse(&query.repo_name).during(OP)?;
    let collaborators = state.github.list_collaborators(&repo).await.during(OP)?;

    Ok(Json(CollaboratorsResponse { collaborators }))
}

#[derive(Debug, Deserialize)]
pub struct AddCollaboratorRequest {
    repo_name: String,
    username: String,
    /// Defaults to "push"
    #[serde(default)]
    permission: Permission,
}

/// POST /github/collaborator/add
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<AddCollaboratorRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    const OP: &str = "add collaborator";

    let repo = RepoName::parse(&req.repo_name).during(OP)?;
    state
        .github
        .add_collaborator(&repo, &req.username, req.permission)
        .await
        .during(OP)?;

    Ok(Json(MessageResponse {
        message: format!(
            "Collaborator '{}' invited with {} access",
            req.username,
            req.permission.as_str()
        ),
    }))
}

#[derive(Debug, Deserialize)]
pub struct RemoveCollaboratorRequest {
    repo_name: String,
    username: String,
}

/// POST /github/collaborator/remove
pub async fn remove(
    State(state): State<AppState>,
    Json(req): Json<RemoveCollaboratorRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    const OP: &str = "remove collaborator";

    let repo = RepoName::parse(&req.repo_name).during(OP)?;
    state
        .github
        .remove_collaborator(&repo, &req.username)
        .await
        .during(OP)?;

    Ok(Json(MessageResponse {
        message: format!("Collaborator '{}' removed", req.username),
    }))
}

#[derive(Debug, Serialize)]
pub struct WebhooksResponse {
    webhooks: Vec<Webhook>,
}

/// GET /github/webhooks
pub async fn webhooks(
    State(state): State<AppState>,
    Query(query): Query<RepoQuery>,
) -> Result<Json<WebhooksResponse>, ApiError> {
    const OP: &str = "list webhooks";

    let repo = RepoName::parse(&query.repo_name).during(OP)?;
    let webhooks = state.github.list_webhooks(&repo).await.during(OP)?;

    Ok(Json(WebhooksResponse { webhooks }))
}

#[derive(Debug, Deserialize)]
pub struct TeamsQuery {
    org_name: String,
}

#[derive(Debug, Serialize)]
pub struct TeamsResponse {
    teams: Vec<String>,
}

/// GET /github/teams
pub async fn teams(
    State(state): State<AppState>,
    Query(query): Query<TeamsQuery>,
) -> Result<Json<TeamsResponse>, ApiError> {
    const OP: &str = "list teams";

    let teams = state.github.list_teams(&query.org_name).await.during(OP)?;

    Ok(Json(TeamsResponse { teams }))
}
