//! Translation handlers, one module per domain area
//!
//! Every handler follows the same linear shape: validate the request,
//! make one logical call through the shared client handle, project the
//! result into the response envelope. Failures convert at the handler
//! boundary via [`crate::error::ResultExt::during`].

pub mod branches;
pub mod collab;
pub mod issues;
pub mod meta;
pub mod pulls;
pub mod repos;

use serde::{Deserialize, Serialize};

/// Query parameters naming a repository
#[derive(Debug, Deserialize)]
pub struct RepoQuery {
    /// Repository as `owner/name`
    pub repo_name: String,
}

/// Success envelope for operations that return only a confirmation
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}
