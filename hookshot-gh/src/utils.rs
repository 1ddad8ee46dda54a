//! # GitHub Utility Functions
//!
//! Helpers for turning user input into the owner/repository pair the
//! endpoints expect.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static REPO_SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^(?:(?:https?|ssh)://(?:[^@/]+@)?[^/]+/|[^@\s/]+@[^:\s]+:)?([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(?:\.git)?(?:/.*)?$",
  )
  .expect("Failed to compile repository slug regex")
});

/// Extract `(owner, repo)` from a repository reference.
///
/// Accepts any of:
/// - `owner/repo`
/// - `https://github.com/owner/repo` (with optional `.git` or trailing path)
/// - `git@github.com:owner/repo.git`
///
/// Enterprise hosts work the same way as `github.com`.
pub fn parse_repo_slug(input: &str) -> Result<(String, String)> {
  let captures = REPO_SLUG_REGEX
    .captures(input.trim())
    .ok_or_else(|| Error::InvalidArgument(format!("Could not extract owner and repo from: {input}")))?;

  match (captures.get(1), captures.get(2)) {
    (Some(owner), Some(repo)) => Ok((owner.as_str().to_string(), repo.as_str().to_string())),
    _ => Err(Error::InvalidArgument(format!(
      "Could not extract owner and repo from: {input}"
    ))),
  }
}
