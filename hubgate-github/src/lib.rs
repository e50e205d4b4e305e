//! Hubgate GitHub - the source-control client layer of the hubgate gateway
//!
//! Wraps octocrab behind the narrow [`SourceControl`] capability trait so
//! the HTTP layer stays testable against a fake host.

mod branches;
mod client;
mod collab;
mod error;
mod issues;
mod pulls;
mod repos;
mod source_control;
mod types;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use source_control::SourceControl;
pub use types::{
    Account, Branch, Comment, Comparison, Issue, IssueState, NewIssue, NewPullRequest,
    NewRepository, Permission, PullRequest, RateLimitStatus, RepoName, Repository, Review, Webhook,
};
