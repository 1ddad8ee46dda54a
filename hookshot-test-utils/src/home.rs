//! Isolated HOME and XDG directories for running the CLI in tests
//!
//! Rather than mutating the test process environment, [`TestHome`] hands out
//! the variables to set on a spawned command, so tests stay parallel-safe.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary home directory with its own XDG config/data/cache roots
pub struct TestHome {
  /// The temporary directory that backs HOME
  pub temp_dir: TempDir,
}

impl Default for TestHome {
  fn default() -> Self {
    Self::new()
  }
}

impl TestHome {
  /// XDG environment variable names
  pub const XDG_CONFIG_HOME: &'static str = "XDG_CONFIG_HOME";
  pub const XDG_DATA_HOME: &'static str = "XDG_DATA_HOME";
  pub const XDG_CACHE_HOME: &'static str = "XDG_CACHE_HOME";

  /// Create a new temporary home with empty XDG directories
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    for dir in [".config", ".local/share", ".cache"] {
      fs::create_dir_all(temp_dir.path().join(dir)).expect("Failed to create XDG directory");
    }

    Self { temp_dir }
  }

  /// Get the path to the temporary HOME directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Get the path to a file in the temporary HOME directory
  pub fn home_path(&self, relative_path: &str) -> PathBuf {
    self.temp_dir.path().join(relative_path)
  }

  /// Get the path to the XDG config directory
  pub fn config_dir(&self) -> PathBuf {
    self.home_path(".config")
  }

  /// Write a `.netrc` into the temporary home
  pub fn write_netrc(&self, content: &str) -> PathBuf {
    let path = self.home_path(".netrc");
    fs::write(&path, content).expect("Failed to write test .netrc");
    path
  }

  /// Environment variables pointing a child process at this home
  pub fn envs(&self) -> Vec<(&'static str, PathBuf)> {
    vec![
      ("HOME", self.home_dir().to_path_buf()),
      (Self::XDG_CONFIG_HOME, self.home_path(".config")),
      (Self::XDG_DATA_HOME, self.home_path(".local/share")),
      (Self::XDG_CACHE_HOME, self.home_path(".cache")),
    ]
  }
}
