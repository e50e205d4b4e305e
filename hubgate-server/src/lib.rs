//! Hubgate - a thin HTTP gateway over the GitHub API
//!
//! Each endpoint validates its request, performs one logical call through
//! the shared [`SourceControl`] handle, and reshapes the result into a
//! JSON envelope. No state survives a request.

pub mod error;
pub mod handlers;
pub mod routes;

use std::sync::Arc;

use hubgate_github::SourceControl;

/// Shared application state
///
/// Holds the single long-lived, read-only source-control handle. Cloning
/// is cheap; nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Authenticated source-control client
    pub github: Arc<dyn SourceControl>,
}

impl AppState {
    /// Wrap a source-control handle into the shared state
    pub fn new(github: Arc<dyn SourceControl>) -> Self {
        Self { github }
    }
}
