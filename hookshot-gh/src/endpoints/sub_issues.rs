//! GitHub sub-issue endpoint implementations.
//!
//! A parent issue keeps an ordered list of child issues. Ordering lives on
//! the server; these calls only relay what the caller asks for.

use reqwest::Method;
use tracing::{info, instrument, trace};

use super::validate_repo;
use crate::client::GitHubClient;
use crate::consts::MEDIA_TYPE_SUB_ISSUES_PREVIEW;
use crate::error::Result;
use crate::models::{AddSubIssueRequest, ReprioritizeSubIssueRequest, SubIssue};
use crate::options::ListOptions;
use crate::response::Response;

impl GitHubClient {
  /// Attach an existing issue as a sub-issue of `issue_number`.
  ///
  /// Returns the issue record GitHub sends back.
  ///
  /// # Errors
  ///
  /// Returns an error if `owner` or `repo` is blank, the request fails, or
  /// the response cannot be parsed.
  #[instrument(skip(self), level = "debug")]
  pub async fn add_sub_issue(
    &self,
    owner: &str,
    repo: &str,
    issue_number: u64,
    body: &AddSubIssueRequest,
  ) -> Result<(SubIssue, Response)> {
    validate_repo(owner, repo)?;
    info!(
      "Adding issue {} as a sub-issue of #{} in {}/{}",
      body.sub_issue_id, issue_number, owner, repo
    );

    let request = self
      .request(
        Method::POST,
        &format!("repos/{owner}/{repo}/issues/{issue_number}/sub_issues"),
        MEDIA_TYPE_SUB_ISSUES_PREVIEW,
      )
      .json(body);

    self.send_json(request).await
  }

  /// Detach a sub-issue from `issue_number`.
  #[instrument(skip(self), level = "debug")]
  pub async fn remove_sub_issue(&self, owner: &str, repo: &str, issue_number: u64, sub_issue_id: i64) -> Result<Response> {
    validate_repo(owner, repo)?;
    info!(
      "Removing sub-issue {} from #{} in {}/{}",
      sub_issue_id, issue_number, owner, repo
    );

    let request = self.request(
      Method::DELETE,
      &format!("repos/{owner}/{repo}/issues/{issue_number}/sub_issues/{sub_issue_id}"),
      MEDIA_TYPE_SUB_ISSUES_PREVIEW,
    );

    self.send_empty(request).await
  }

  /// List the sub-issues of `issue_number` in priority order.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_sub_issues(
    &self,
    owner: &str,
    repo: &str,
    issue_number: u64,
    opts: Option<&ListOptions>,
  ) -> Result<(Vec<SubIssue>, Response)> {
    validate_repo(owner, repo)?;
    info!("Listing sub-issues of #{} in {}/{}", issue_number, owner, repo);

    let mut request = self.request(
      Method::GET,
      &format!("repos/{owner}/{repo}/issues/{issue_number}/sub_issues"),
      MEDIA_TYPE_SUB_ISSUES_PREVIEW,
    );
    if let Some(opts) = opts {
      request = request.query(opts);
    }

    let (sub_issues, response) = self.send_json::<Vec<SubIssue>>(request).await?;
    trace!("Received {} sub-issues", sub_issues.len());
    Ok((sub_issues, response))
  }

  /// Move a sub-issue within the priority list of `issue_number`.
  ///
  /// With no `after_id` the sub-issue goes to the top; otherwise it is
  /// placed directly after `after_id`.
  #[instrument(skip(self), level = "debug")]
  pub async fn reprioritize_sub_issue(
    &self,
    owner: &str,
    repo: &str,
    issue_number: u64,
    body: &ReprioritizeSubIssueRequest,
  ) -> Result<(SubIssue, Response)> {
    validate_repo(owner, repo)?;
    match body.after_id {
      Some(after_id) => info!(
        "Moving sub-issue {} after {} on #{} in {}/{}",
        body.sub_issue_id, after_id, issue_number, owner, repo
      ),
      None => info!(
        "Moving sub-issue {} to the top of #{} in {}/{}",
        body.sub_issue_id, issue_number, owner, repo
      ),
    }

    let request = self
      .request(
        Method::POST,
        &format!("repos/{owner}/{repo}/issues/{issue_number}/sub_issues/priority"),
        MEDIA_TYPE_SUB_ISSUES_PREVIEW,
      )
      .json(body);

    self.send_json(request).await
  }
}
