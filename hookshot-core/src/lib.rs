//! # Hookshot Core
//!
//! Configuration and credential handling shared by the hookshot client and
//! command-line tool.

pub mod config;
pub mod creds;

pub use config::{ConfigDirs, GitHubSettings, HookshotConfig};
pub use creds::Credentials;
