//! Route table for the gateway

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{branches, collab, issues, meta, pulls, repos};
use crate::AppState;

/// Build the HTTP router
///
/// Read operations are GETs with query parameters; mutating operations
/// are POSTs with JSON bodies. Unknown routes fall through to a JSON 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(meta::root))
        .route("/health", get(meta::health))
        .route("/version", get(meta::version))
        .route("/github/me", get(meta::me))
        .route("/github/rate-limit", get(meta::rate_limit))
        .route("/github/branches", get(branches::list))
        .route("/github/branch/create", post(branches::create))
        .route("/github/branch/delete", post(branches::delete))
        .route("/github/branch/compare", post(branches::compare))
        .route("/github/pull-requests", get(pulls::list))
        .route("/github/pull-request/create", post(pulls::create))
        .route("/github/pr/merge", post(pulls::merge))
        .route("/github/pr/close", post(pulls::close))
        .route("/github/pr/comment", post(pulls::comment))
        .route("/github/pr/reviews", get(pulls::reviews))
        .route("/github/repos", get(repos::list))
        .route("/github/repo", get(repos::get_one))
        .route("/github/repo/create", post(repos::create))
        .route("/github/issues", get(issues::list))
        .route("/github/issue/create", post(issues::create))
        .route("/github/issue/comment", post(issues::comment))
        .route("/github/issue/state", post(issues::set_state))
        .route("/github/webhooks", get(collab::webhooks))
        .route("/github/collaborators", get(collab::list))
        .route("/github/collaborator/add", post(collab::add))
        .route("/github/collaborator/remove", post(collab::remove))
        .route("/github/teams", get(collab::teams))
        .fallback(meta::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
