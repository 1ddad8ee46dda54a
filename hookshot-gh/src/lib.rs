//! # GitHub API Client
//!
//! Typed bindings for GitHub's repository pre-receive hook and sub-issue
//! REST endpoints. Each operation maps onto exactly one HTTP request and
//! returns the decoded payload together with a [`Response`] descriptor.

pub mod auth;
pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod options;
pub mod response;
pub mod utils;

// Re-export the client
pub use client::GitHubClient;
pub use error::{Error, Result};
// Re-export models
pub use models::{
  AddSubIssueRequest, Enforcement, GitHubAuth, IssueType, Label, Match, Milestone, PreReceiveHook, PullRequestLinks,
  Reactions, ReprioritizeSubIssueRequest, Repository, SubIssue, SubIssuesSummary, TextMatch, User,
};
pub use options::ListOptions;
pub use response::{Rate, Response};
pub use utils::parse_repo_slug;
