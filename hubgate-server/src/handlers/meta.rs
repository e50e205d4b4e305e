//! Root, health, identity and quota endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hubgate_github::RateLimitStatus;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{ApiError, ResultExt};
use crate::AppState;

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the hubgate GitHub gateway" }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /version
pub async fn version() -> Json<Value> {
    Json(json!({ "version": env!("CARGO_PKG_VERSION") }))
}

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    login: String,
    name: Option<String>,
    public_repos: u64,
}

/// GET /github/me
pub async fn me(State(state): State<AppState>) -> Result<Json<MeResponse>, ApiError> {
    const OP: &str = "fetch current user";

    let account = state.github.current_account().await.during(OP)?;

    Ok(Json(MeResponse {
        login: account.login,
        name: account.name,
        public_repos: account.public_repos,
    }))
}

#[derive(Debug, Serialize)]
pub struct RateLimitResponse {
    core: RateLimitStatus,
}

/// GET /github/rate-limit
pub async fn rate_limit(
    State(state): State<AppState>,
) -> Result<Json<RateLimitResponse>, ApiError> {
    const OP: &str = "fetch rate limit";

    let core = state.github.rate_limit_status().await.during(OP)?;

    Ok(Json(RateLimitResponse { core }))
}
