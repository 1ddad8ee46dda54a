//! # Credential Management
//!
//! Retrieval and storage of GitHub credentials in the user's `.netrc`.

pub mod netrc;

/// Represents credentials for a service
#[derive(Debug, Clone)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}
