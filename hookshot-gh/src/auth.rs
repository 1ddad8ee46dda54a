//! Authentication helpers for the GitHub client.
//!
//! Credentials come from the user's `.netrc`, keyed by the host of the
//! configured API URL, so GitHub.com and Enterprise Server installs can
//! live side by side.

use std::path::Path;

use anyhow::{Context, Result};
use hookshot_core::config::GitHubSettings;
use hookshot_core::creds::Credentials;
use hookshot_core::creds::netrc::{get_netrc_path, parse_netrc_file};
use tracing::debug;

use crate::client::GitHubClient;
use crate::models::GitHubAuth;

/// Check if credentials for `machine` are available for the current user.
pub fn check_github_credentials(home: &Path, machine: &str) -> Result<bool> {
  Ok(find_credentials(home, machine)?.is_some())
}

/// Load credentials for `machine` from `.netrc`.
pub fn get_github_credentials(home: &Path, machine: &str) -> Result<Credentials> {
  find_credentials(home, machine)?.ok_or_else(|| {
    anyhow::anyhow!(
      "GitHub credentials not found in .netrc file. Please add credentials for machine '{machine}' \
       or run 'hookshot creds setup'."
    )
  })
}

/// Creates an authenticated client for the configured API using `.netrc`
/// credentials.
pub fn create_github_client_from_settings(home: &Path, settings: &GitHubSettings) -> Result<GitHubClient> {
  let machine = settings.netrc_machine();
  debug!("Loading GitHub credentials for machine {}", machine);

  let credentials = get_github_credentials(home, &machine).context("Failed to get credentials")?;
  let auth = GitHubAuth {
    username: credentials.username,
    token: credentials.password,
  };

  GitHubClient::with_settings(settings, auth).context("Failed to create GitHub client")
}

fn find_credentials(home: &Path, machine: &str) -> Result<Option<Credentials>> {
  let netrc_path = get_netrc_path(home);
  if !netrc_path.exists() {
    debug!("No .netrc found at {}", netrc_path.display());
    return Ok(None);
  }
  parse_netrc_file(&netrc_path, machine)
}

#[cfg(test)]
mod tests {
  use hookshot_test_utils::NetrcGuard;

  use super::*;

  const NETRC: &str = r#"machine github.com
  login testuser
  password gh-token

machine github.example.com
  login ghe-user
  password ghe-token
"#;

  #[test]
  fn test_get_github_credentials() {
    let guard = NetrcGuard::new(NETRC);

    let creds = get_github_credentials(guard.home_dir(), "github.com").unwrap();
    assert_eq!(creds.username, "testuser");
    assert_eq!(creds.password, "gh-token");

    let creds = get_github_credentials(guard.home_dir(), "github.example.com").unwrap();
    assert_eq!(creds.username, "ghe-user");
  }

  #[test]
  fn test_get_github_credentials_error() {
    let guard = NetrcGuard::new("");

    let error = get_github_credentials(guard.home_dir(), "github.com")
      .unwrap_err()
      .to_string();
    assert!(error.contains("GitHub credentials not found"));
    assert!(error.contains("github.com"));
  }

  #[test]
  fn test_check_github_credentials_without_netrc() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    assert!(!check_github_credentials(temp_dir.path(), "github.com").unwrap());
  }

  #[test]
  fn test_create_client_from_enterprise_settings() {
    let guard = NetrcGuard::new(NETRC);
    let settings = GitHubSettings {
      api_url: "https://github.example.com/api/v3".to_string(),
      user_agent: None,
      timeout_secs: None,
    };

    let client = create_github_client_from_settings(guard.home_dir(), &settings).unwrap();

    assert_eq!(client.base_url(), "https://github.example.com/api/v3");
    assert_eq!(client.auth.username, "ghe-user");
    assert_eq!(client.auth.token, "ghe-token");
  }
}
