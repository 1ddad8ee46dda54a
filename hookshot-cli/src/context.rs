//! Per-invocation context: config file location, home directory and an
//! authenticated client.
//!
//! The config file is only parsed when a command asks for it, so commands
//! that rewrite the file still work when it is malformed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use hookshot_core::config::{ConfigDirs, HookshotConfig};
use hookshot_gh::GitHubClient;
use hookshot_gh::auth::create_github_client_from_settings;
use tokio::runtime::Runtime;
use tracing::debug;

/// Everything a command needs before it talks to GitHub
pub struct AppContext {
  pub config_path: PathBuf,
  pub home: PathBuf,
}

impl AppContext {
  /// Resolve the config file location from `config_override` (or the
  /// default location) and the home directory.
  pub fn load(config_override: Option<&Path>) -> Result<Self> {
    let config_path = match config_override {
      Some(path) => path.to_path_buf(),
      None => ConfigDirs::new()?.config_path(),
    };
    debug!("Using config file {}", config_path.display());

    let home = BaseDirs::new()
      .context("Failed to determine home directory")?
      .home_dir()
      .to_path_buf();

    Ok(Self { config_path, home })
  }

  /// Read the config file and apply environment overrides
  pub fn config(&self) -> Result<HookshotConfig> {
    let mut config = HookshotConfig::load_from(&self.config_path)?;
    config.apply_env_overrides()?;
    Ok(config)
  }

  /// Build an authenticated client for the configured API
  pub fn client(&self) -> Result<GitHubClient> {
    let config = self.config()?;
    create_github_client_from_settings(&self.home, &config.github)
  }

  /// Creates a tokio runtime and an authenticated GitHub client
  pub fn runtime_and_client(&self) -> Result<(Runtime, GitHubClient)> {
    let rt = Runtime::new().context("Failed to create async runtime")?;
    let client = self.client()?;
    Ok((rt, client))
  }
}
