//! # Configuration Management
//!
//! Handles application configuration and directory management for hookshot,
//! including XDG base directory support. Settings live in `config.toml` in
//! the config directory; environment variables override the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Default GitHub API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Environment variable overriding [`GitHubSettings::api_url`]
pub const ENV_API_URL: &str = "HOOKSHOT_GITHUB_API_URL";

/// Environment variable overriding [`GitHubSettings::timeout_secs`]
pub const ENV_TIMEOUT_SECS: &str = "HOOKSHOT_TIMEOUT_SECS";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Represents the configuration directories for the hookshot application
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
  pub cache_dir: Option<PathBuf>,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance from the platform's project directories
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("", "", "hookshot").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
      data_dir: proj_dirs.data_dir().to_path_buf(),
      cache_dir: Some(proj_dirs.cache_dir().to_path_buf()),
    })
  }

  /// Create a ConfigDirs instance rooted at an explicit directory
  pub fn from_root<P: AsRef<Path>>(root: P) -> Self {
    let root = root.as_ref();
    Self {
      config_dir: root.join("config"),
      data_dir: root.join("data"),
      cache_dir: Some(root.join("cache")),
    }
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Get the data directory
  pub fn data_dir(&self) -> &PathBuf {
    &self.data_dir
  }

  /// Get the cache directory
  pub fn cache_dir(&self) -> Option<&PathBuf> {
    self.cache_dir.as_ref()
  }

  /// Initialize the configuration directories
  pub fn init(&self) -> Result<()> {
    fs::create_dir_all(&self.config_dir).context("Failed to create config directory")?;
    fs::create_dir_all(&self.data_dir).context("Failed to create data directory")?;
    if let Some(cache_dir) = &self.cache_dir {
      fs::create_dir_all(cache_dir).context("Failed to create cache directory")?;
    }
    Ok(())
  }

  /// Get the path to the configuration file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE_NAME)
  }

  /// Load configuration from the default location or return defaults
  pub fn load_config(&self) -> Result<HookshotConfig> {
    HookshotConfig::load_from(&self.config_path())
  }

  /// Save configuration to the default location
  pub fn save_config(&self, config: &HookshotConfig) -> Result<()> {
    config.save_to(&self.config_path())
  }
}

/// Top-level configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookshotConfig {
  pub github: GitHubSettings,
}

/// Settings for talking to a GitHub API server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubSettings {
  /// API root, e.g. `https://github.example.com/api/v3` for Enterprise Server
  pub api_url: String,
  /// Overrides the client's default User-Agent
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user_agent: Option<String>,
  /// Per-request timeout, handed to the HTTP client. `0` disables it.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub timeout_secs: Option<u64>,
}

impl Default for GitHubSettings {
  fn default() -> Self {
    Self {
      api_url: DEFAULT_API_URL.to_string(),
      user_agent: None,
      timeout_secs: None,
    }
  }
}

impl GitHubSettings {
  /// The `.netrc` machine name holding credentials for this API.
  ///
  /// `api.github.com` maps to `github.com`; any other host is used as is.
  pub fn netrc_machine(&self) -> String {
    let host = Url::parse(&self.api_url)
      .ok()
      .and_then(|url| url.host_str().map(str::to_string));

    match host.as_deref() {
      Some("api.github.com") | None => "github.com".to_string(),
      Some(host) => host.to_string(),
    }
  }
}

impl HookshotConfig {
  /// Read a config file, returning defaults if it does not exist
  pub fn load_from(path: &Path) -> Result<Self> {
    if !path.exists() {
      debug!("No config file at {}, using defaults", path.display());
      return Ok(Self::default());
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", path.display()))
  }

  /// Write the config file, creating its directory if needed
  pub fn save_to(&self, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;
    fs::write(path, content).with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
  }

  /// Apply overrides from the process environment
  pub fn apply_env_overrides(&mut self) -> Result<()> {
    self.apply_overrides_from(|key| std::env::var(key).ok())
  }

  /// Apply overrides using `lookup` to read variables
  pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
  where
    F: Fn(&str) -> Option<String>,
  {
    if let Some(api_url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
      debug!("Using API URL from {}", ENV_API_URL);
      self.github.api_url = api_url;
    }

    if let Some(timeout) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
      let secs = timeout
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{timeout}'"))?;
      self.github.timeout_secs = Some(secs);
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_from_root_layout() {
    let temp_dir = TempDir::new().unwrap();
    let dirs = ConfigDirs::from_root(temp_dir.path());

    assert_eq!(dirs.config_path(), temp_dir.path().join("config").join("config.toml"));
    assert_eq!(dirs.data_dir(), &temp_dir.path().join("data"));
    assert!(dirs.cache_dir().is_some());
  }

  #[test]
  fn test_init_creates_directories() {
    let temp_dir = TempDir::new().unwrap();
    let dirs = ConfigDirs::from_root(temp_dir.path());
    dirs.init().unwrap();

    assert!(dirs.config_dir().exists());
    assert!(dirs.data_dir().exists());
    assert!(dirs.cache_dir().unwrap().exists());
  }

  #[test]
  fn test_load_missing_config_returns_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let dirs = ConfigDirs::from_root(temp_dir.path());

    let config = dirs.load_config().unwrap();

    assert_eq!(config, HookshotConfig::default());
    assert_eq!(config.github.api_url, DEFAULT_API_URL);
  }

  #[test]
  fn test_save_and_load_config() {
    let temp_dir = TempDir::new().unwrap();
    let dirs = ConfigDirs::from_root(temp_dir.path());
    let config = HookshotConfig {
      github: GitHubSettings {
        api_url: "https://github.example.com/api/v3".to_string(),
        user_agent: None,
        timeout_secs: Some(30),
      },
    };

    dirs.save_config(&config).unwrap();

    assert_eq!(dirs.load_config().unwrap(), config);
  }

  #[test]
  fn test_partial_config_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[github]\ntimeout_secs = 10\n").unwrap();

    let config = HookshotConfig::load_from(&path).unwrap();

    assert_eq!(config.github.api_url, DEFAULT_API_URL);
    assert_eq!(config.github.timeout_secs, Some(10));
  }

  #[test]
  fn test_invalid_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[github\napi_url = ").unwrap();

    let err = HookshotConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
  }

  #[test]
  fn test_env_overrides() {
    let vars = HashMap::from([
      (ENV_API_URL, "https://ghe.internal/api/v3".to_string()),
      (ENV_TIMEOUT_SECS, "15".to_string()),
    ]);
    let mut config = HookshotConfig::default();

    config.apply_overrides_from(|key| vars.get(key).cloned()).unwrap();

    assert_eq!(config.github.api_url, "https://ghe.internal/api/v3");
    assert_eq!(config.github.timeout_secs, Some(15));
  }

  #[test]
  fn test_invalid_timeout_override() {
    let mut config = HookshotConfig::default();
    let result = config.apply_overrides_from(|key| (key == ENV_TIMEOUT_SECS).then(|| "soon".to_string()));
    assert!(result.is_err());
  }

  #[test]
  fn test_netrc_machine() {
    let mut settings = GitHubSettings::default();
    assert_eq!(settings.netrc_machine(), "github.com");

    settings.api_url = "https://github.example.com/api/v3".to_string();
    assert_eq!(settings.netrc_machine(), "github.example.com");

    settings.api_url = "not a url".to_string();
    assert_eq!(settings.netrc_machine(), "github.com");
  }
}
