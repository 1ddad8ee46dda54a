//! # Repository Pre-receive Hook Endpoints
//!
//! Enforcement settings for the pre-receive hooks applied to a repository.
//! Available on GitHub Enterprise Server only, behind a preview media type.

use reqwest::Method;
use tracing::{info, instrument, trace};

use super::validate_repo;
use crate::client::GitHubClient;
use crate::consts::MEDIA_TYPE_PRE_RECEIVE_HOOKS_PREVIEW;
use crate::error::Result;
use crate::models::PreReceiveHook;
use crate::options::ListOptions;
use crate::response::Response;

impl GitHubClient {
  /// List the pre-receive hooks for a repository.
  ///
  /// # Errors
  ///
  /// Returns an error if `owner` or `repo` is blank, the options cannot be
  /// encoded, the request fails, or the response cannot be parsed.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_pre_receive_hooks(
    &self,
    owner: &str,
    repo: &str,
    opts: Option<&ListOptions>,
  ) -> Result<(Vec<PreReceiveHook>, Response)> {
    validate_repo(owner, repo)?;
    info!("Listing pre-receive hooks for {}/{}", owner, repo);

    let mut request = self.request(
      Method::GET,
      &format!("repos/{owner}/{repo}/pre-receive-hooks"),
      MEDIA_TYPE_PRE_RECEIVE_HOOKS_PREVIEW,
    );
    if let Some(opts) = opts {
      request = request.query(opts);
    }

    let (hooks, response) = self.send_json::<Vec<PreReceiveHook>>(request).await?;
    trace!("Pre-receive hooks: {:?}", hooks);
    Ok((hooks, response))
  }

  /// Get a single pre-receive hook.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_pre_receive_hook(&self, owner: &str, repo: &str, id: i64) -> Result<(PreReceiveHook, Response)> {
    validate_repo(owner, repo)?;
    info!("Fetching pre-receive hook {} for {}/{}", id, owner, repo);

    let request = self.request(
      Method::GET,
      &format!("repos/{owner}/{repo}/pre-receive-hooks/{id}"),
      MEDIA_TYPE_PRE_RECEIVE_HOOKS_PREVIEW,
    );

    self.send_json(request).await
  }

  /// Update a pre-receive hook.
  ///
  /// Only the fields set on `hook` are sent, so unset fields keep their
  /// current value on the server.
  #[instrument(skip(self, hook), level = "debug")]
  pub async fn update_pre_receive_hook(
    &self,
    owner: &str,
    repo: &str,
    id: i64,
    hook: &PreReceiveHook,
  ) -> Result<(PreReceiveHook, Response)> {
    validate_repo(owner, repo)?;
    info!("Updating pre-receive hook {} for {}/{}", id, owner, repo);
    trace!("Patch body: {:?}", hook);

    let request = self
      .request(
        Method::PATCH,
        &format!("repos/{owner}/{repo}/pre-receive-hooks/{id}"),
        MEDIA_TYPE_PRE_RECEIVE_HOOKS_PREVIEW,
      )
      .json(hook);

    self.send_json(request).await
  }

  /// Remove the repository-level enforcement override for a pre-receive hook.
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_pre_receive_hook(&self, owner: &str, repo: &str, id: i64) -> Result<Response> {
    validate_repo(owner, repo)?;
    info!("Deleting pre-receive hook {} for {}/{}", id, owner, repo);

    let request = self.request(
      Method::DELETE,
      &format!("repos/{owner}/{repo}/pre-receive-hooks/{id}"),
      MEDIA_TYPE_PRE_RECEIVE_HOOKS_PREVIEW,
    );

    self.send_empty(request).await
  }
}
