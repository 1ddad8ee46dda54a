//! # Client Errors
//!
//! Every operation fails in one of two ways: the request could not be built
//! locally (nothing was sent), or the transport/API call failed. API failures
//! carry the [`Response`] descriptor unchanged so callers can inspect status,
//! headers and rate limits.

use reqwest::StatusCode;

use crate::response::Response;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`GitHubClient`](crate::GitHubClient) operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// An argument was rejected before any request was built.
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  /// The request could not be constructed, e.g. the query options or the
  /// body failed to encode. No network call was made.
  #[error("Failed to build request: {0}")]
  Request(#[source] reqwest::Error),

  /// The request was sent but the exchange did not complete. `response` is
  /// set when the status line arrived and reading the body failed.
  #[error("GitHub request failed: {source}")]
  Transport {
    #[source]
    source: reqwest::Error,
    response: Option<Box<Response>>,
  },

  /// GitHub answered with a non-success status.
  #[error("GitHub API error: HTTP {}{}", .status, .message.as_deref().map(|m| format!(" - {m}")).unwrap_or_default())]
  Api {
    status: StatusCode,
    /// The `message` field of GitHub's error body, when present
    message: Option<String>,
    /// Raw response body
    body: String,
    response: Box<Response>,
  },

  /// A success response whose body did not decode into the expected type.
  #[error("Failed to parse GitHub response: {source}")]
  Decode {
    #[source]
    source: serde_json::Error,
    response: Box<Response>,
  },
}

impl Error {
  /// The response descriptor, for errors that got as far as an HTTP response
  pub fn response(&self) -> Option<&Response> {
    match self {
      Error::Api { response, .. } | Error::Decode { response, .. } => Some(response),
      Error::Transport { response, .. } => response.as_deref(),
      _ => None,
    }
  }

  pub(crate) fn transport(source: reqwest::Error) -> Self {
    Error::Transport { source, response: None }
  }

  /// The HTTP status, for errors that got as far as an HTTP response
  pub fn status(&self) -> Option<StatusCode> {
    self.response().map(|r| r.status)
  }
}
