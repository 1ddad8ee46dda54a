//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions. Endpoint modules
//! build requests with [`GitHubClient::request`] and hand them to one of the
//! `send_*` helpers, which perform the single network call, check the status
//! and decode the body.

use std::time::Duration;

use hookshot_core::config::GitHubSettings;
use reqwest::{Client, Method, RequestBuilder, header};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::consts::{ACCEPT, API_BASE_URL, USER_AGENT};
use crate::error::{Error, Result};
use crate::models::GitHubAuth;
use crate::response::Response;

/// Represents a GitHub API client
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) user_agent: String,
  pub(crate) auth: GitHubAuth,
}

impl GitHubClient {
  /// Create a new GitHub client against the public API
  pub fn new(auth: GitHubAuth) -> Self {
    Self::with_base_url(API_BASE_URL, auth)
  }

  /// Create a client against a specific API root, e.g.
  /// `https://github.example.com/api/v3` for GitHub Enterprise Server.
  pub fn with_base_url(base_url: &str, auth: GitHubAuth) -> Self {
    Self {
      client: Client::new(),
      base_url: base_url.trim_end_matches('/').to_string(),
      user_agent: USER_AGENT.to_string(),
      auth,
    }
  }

  /// Create a client from configured settings.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Request`] if the underlying HTTP client cannot be
  /// initialized.
  pub fn with_settings(settings: &GitHubSettings, auth: GitHubAuth) -> Result<Self> {
    let mut builder = Client::builder();
    if let Some(secs) = settings.timeout_secs.filter(|secs| *secs > 0) {
      builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build().map_err(Error::Request)?;

    Ok(Self {
      client,
      base_url: settings.api_url.trim_end_matches('/').to_string(),
      user_agent: settings.user_agent.clone().unwrap_or_else(|| USER_AGENT.to_string()),
      auth,
    })
  }

  /// The API root requests are sent to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Test the GitHub connection by fetching the current user
  pub async fn test_connection(&self) -> Result<bool> {
    let request = self.request(Method::GET, "user", ACCEPT).build().map_err(Error::Request)?;
    let response = self.client.execute(request).await.map_err(Error::transport)?;

    Ok(response.status().is_success())
  }

  /// Start a request for `path` (relative to the API root) with the
  /// standard headers and credentials applied.
  pub(crate) fn request(&self, method: Method, path: &str, accept: &str) -> RequestBuilder {
    let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
    trace!("GitHub API URL: {} {}", method, url);

    self
      .client
      .request(method, url)
      .header(header::ACCEPT, accept)
      .header(header::USER_AGENT, &self.user_agent)
      .basic_auth(&self.auth.username, Some(&self.auth.token))
  }

  /// Send a request and decode its JSON body into `T`.
  pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<(T, Response)> {
    let (body, response) = self.send(builder).await?;

    match serde_json::from_str::<T>(&body) {
      Ok(value) => Ok((value, response)),
      Err(source) => {
        warn!("Failed to decode GitHub response body: {}", source);
        Err(Error::Decode {
          source,
          response: Box::new(response),
        })
      }
    }
  }

  /// Send a request whose success body carries nothing of interest.
  pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<Response> {
    let (body, response) = self.send(builder).await?;
    if !body.is_empty() {
      trace!("Ignoring {} byte response body", body.len());
    }
    Ok(response)
  }

  async fn send(&self, builder: RequestBuilder) -> Result<(String, Response)> {
    let request = builder.build().map_err(Error::Request)?;
    let method = request.method().clone();
    let url = request.url().clone();
    debug!("Sending {} {}", method, url);

    let http_response = self.client.execute(request).await.map_err(Error::transport)?;
    let response = Response::from_reqwest(&http_response);
    let status = response.status;
    debug!("GitHub API response status: {}", status);

    let body = match http_response.text().await {
      Ok(body) => body,
      Err(source) => {
        warn!("Failed to read GitHub response body: {}", source);
        return Err(Error::Transport {
          source,
          response: Some(Box::new(response)),
        });
      }
    };
    trace!("Response body: {}", body);

    if status.is_success() {
      return Ok((body, response));
    }

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
      warn!("Authentication failed when accessing GitHub API");
    } else {
      warn!("GitHub API error for {} {}: HTTP {}", method, url, status);
    }

    Err(Error::Api {
      status,
      message: extract_error_message(&body),
      body,
      response: Box::new(response),
    })
  }
}

/// Pull the `message` field out of a GitHub error body, if there is one
fn extract_error_message(body: &str) -> Option<String> {
  let json = serde_json::from_str::<serde_json::Value>(body).ok()?;
  json.get("message").and_then(|m| m.as_str()).map(str::to_string)
}
