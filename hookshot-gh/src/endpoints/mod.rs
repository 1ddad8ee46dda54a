//! # GitHub API Endpoints
//!
//! Endpoint implementations grouped by resource. Each operation validates
//! its path arguments, builds one request and sends it once.

pub mod pre_receive_hooks;
pub mod sub_issues;

use crate::error::{Error, Result};

/// Reject blank owner or repository names before anything is sent.
pub(crate) fn validate_repo(owner: &str, repo: &str) -> Result<()> {
  if owner.trim().is_empty() {
    return Err(Error::InvalidArgument("owner must not be blank".to_string()));
  }
  if repo.trim().is_empty() {
    return Err(Error::InvalidArgument("repository must not be blank".to_string()));
  }
  Ok(())
}

#[cfg(test)]
mod tests;
