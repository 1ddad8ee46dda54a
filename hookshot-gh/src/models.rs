//! Request and response models for the GitHub endpoints hookshot binds.
//!
//! Every read-model field is optional: GitHub omits fields freely and a
//! partial payload must still decode. `None` fields are left out when a
//! model is serialized, which is what gives update requests their
//! patch semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents GitHub authentication credentials
#[derive(Clone)]
pub struct GitHubAuth {
  pub username: String,
  pub token: String,
}

/// Enforcement level of a pre-receive hook on a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforcement {
  Enabled,
  Disabled,
  Testing,
  /// A value this client does not know about yet
  #[serde(other)]
  Unknown,
}

impl Enforcement {
  pub const fn as_str(&self) -> &'static str {
    match self {
      Enforcement::Enabled => "enabled",
      Enforcement::Disabled => "disabled",
      Enforcement::Testing => "testing",
      Enforcement::Unknown => "unknown",
    }
  }
}

impl std::fmt::Display for Enforcement {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A pre-receive hook as configured on a repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreReceiveHook {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub enforcement: Option<Enforcement>,
  #[serde(rename = "configuration_url", skip_serializing_if = "Option::is_none")]
  pub config_url: Option<String>,
}

/// Represents a GitHub user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub login: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub node_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub html_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub user_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub site_admin: Option<bool>,
}

/// Represents an issue label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub node_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub color: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default: Option<bool>,
}

/// Represents a repository milestone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub node_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub number: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub state: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub creator: Option<User>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub open_issues: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub closed_issues: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub html_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub labels_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub closed_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub due_on: Option<DateTime<Utc>>,
}

/// Links present when an issue is actually a pull request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestLinks {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub html_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub diff_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub patch_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub merged_at: Option<DateTime<Utc>>,
}

/// The subset of repository fields embedded in issue payloads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub node_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub full_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub owner: Option<User>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub private: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fork: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default_branch: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub html_url: Option<String>,
}

/// Reaction counts on an issue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub total_count: Option<i64>,
  #[serde(rename = "+1", skip_serializing_if = "Option::is_none")]
  pub plus_one: Option<i64>,
  #[serde(rename = "-1", skip_serializing_if = "Option::is_none")]
  pub minus_one: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub laugh: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub confused: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub heart: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hooray: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rocket: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub eyes: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
}

/// An organization-defined issue type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueType {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub node_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub color: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_enabled: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

/// Text match metadata, only populated on search results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub object_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub object_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub property: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fragment: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub matches: Vec<Match>,
}

/// A single matched span inside a [`TextMatch`] fragment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub indices: Vec<u32>,
}

/// Progress summary of an issue's own sub-issues
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubIssuesSummary {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub total: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub completed: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub percent_completed: Option<u32>,
}

/// An issue as returned by the sub-issue endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubIssue {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub node_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub number: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub state: Option<String>,
  /// One of `completed`, `not_planned`, `reopened`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub state_reason: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub locked: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub author_association: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user: Option<User>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub labels: Vec<Label>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee: Option<User>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub assignees: Vec<User>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comments: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub closed_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub closed_by: Option<User>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub html_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comments_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub events_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub labels_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub repository_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parent_issue_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub milestone: Option<Milestone>,
  #[serde(rename = "pull_request", skip_serializing_if = "Option::is_none")]
  pub pull_request_links: Option<PullRequestLinks>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub repository: Option<Repository>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reactions: Option<Reactions>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub draft: Option<bool>,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub issue_type: Option<IssueType>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sub_issues_summary: Option<SubIssuesSummary>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub text_matches: Vec<TextMatch>,
  /// One of `off-topic`, `too heated`, `resolved`, `spam`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub active_lock_reason: Option<String>,
}

/// Body of an add-sub-issue request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddSubIssueRequest {
  /// Database id (not the number) of the issue to attach
  pub sub_issue_id: i64,
  /// Move the issue here even if it already has another parent
  #[serde(skip_serializing_if = "Option::is_none")]
  pub replace_parent: Option<bool>,
}

impl AddSubIssueRequest {
  pub const fn new(sub_issue_id: i64) -> Self {
    Self {
      sub_issue_id,
      replace_parent: None,
    }
  }
}

/// Body of a reprioritize-sub-issue request.
///
/// Without `after_id` the sub-issue moves to the top of the list; with it,
/// the sub-issue is placed directly after that one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReprioritizeSubIssueRequest {
  pub sub_issue_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub after_id: Option<i64>,
}

impl ReprioritizeSubIssueRequest {
  pub const fn new(sub_issue_id: i64, after_id: Option<i64>) -> Self {
    Self { sub_issue_id, after_id }
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;
  use serde_json::json;

  use super::*;

  #[test]
  fn test_pre_receive_hook_deserialization() {
    let json = json!({
        "id": 42,
        "name": "Check Commits",
        "enforcement": "disabled",
        "configuration_url": "https://github.example.com/api/v3/admin/pre-receive-hooks/42"
    });

    let hook: PreReceiveHook = serde_json::from_value(json).unwrap();

    assert_eq!(hook.id, Some(42));
    assert_eq!(hook.name.as_deref(), Some("Check Commits"));
    assert_eq!(hook.enforcement, Some(Enforcement::Disabled));
    assert_eq!(
      hook.config_url.as_deref(),
      Some("https://github.example.com/api/v3/admin/pre-receive-hooks/42")
    );
  }

  #[test]
  fn test_pre_receive_hook_unknown_enforcement() {
    let hook: PreReceiveHook = serde_json::from_value(json!({"id": 1, "enforcement": "audit"})).unwrap();
    assert_eq!(hook.enforcement, Some(Enforcement::Unknown));
  }

  #[test]
  fn test_pre_receive_hook_partial_serialization() {
    let hook = PreReceiveHook {
      enforcement: Some(Enforcement::Testing),
      ..Default::default()
    };

    assert_eq!(serde_json::to_value(&hook).unwrap(), json!({"enforcement": "testing"}));
    assert_eq!(serde_json::to_value(PreReceiveHook::default()).unwrap(), json!({}));
  }

  #[test]
  fn test_sub_issue_deserialization() {
    let json = json!({
        "id": 1,
        "node_id": "MDU6SXNzdWUx",
        "number": 1347,
        "state": "open",
        "title": "Found a bug",
        "body": "I'm having a problem with this.",
        "user": {"login": "octocat", "id": 1, "type": "User", "site_admin": false},
        "labels": [{"id": 208045946, "name": "bug", "color": "f29513", "default": true}],
        "assignees": [{"login": "octocat", "id": 1}],
        "comments": 0,
        "created_at": "2011-04-22T13:33:48Z",
        "reactions": {"total_count": 3, "+1": 2, "-1": 1, "rocket": 0},
        "pull_request": {"url": "https://api.github.com/repos/octocat/Hello-World/pulls/1347"},
        "type": {"id": 410, "name": "Task", "is_enabled": true},
        "sub_issues_summary": {"total": 4, "completed": 1, "percent_completed": 25},
        "some_field_we_do_not_model": {"nested": true}
    });

    let issue: SubIssue = serde_json::from_value(json).unwrap();

    assert_eq!(issue.number, Some(1347));
    assert_eq!(issue.user.as_ref().and_then(|u| u.login.as_deref()), Some("octocat"));
    assert_eq!(issue.labels.len(), 1);
    assert_eq!(issue.labels[0].default, Some(true));
    assert_eq!(issue.assignees.len(), 1);
    assert_eq!(issue.created_at, Utc.with_ymd_and_hms(2011, 4, 22, 13, 33, 48).single());
    let reactions = issue.reactions.unwrap();
    assert_eq!(reactions.plus_one, Some(2));
    assert_eq!(reactions.minus_one, Some(1));
    assert!(issue.pull_request_links.is_some());
    assert_eq!(issue.issue_type.and_then(|t| t.name), Some("Task".to_string()));
    assert_eq!(issue.sub_issues_summary.and_then(|s| s.percent_completed), Some(25));
    assert!(issue.milestone.is_none());
  }

  #[test]
  fn test_add_sub_issue_request_serialization() {
    assert_eq!(
      serde_json::to_value(AddSubIssueRequest::new(2)).unwrap(),
      json!({"sub_issue_id": 2})
    );

    let request = AddSubIssueRequest {
      sub_issue_id: 2,
      replace_parent: Some(true),
    };
    assert_eq!(
      serde_json::to_value(request).unwrap(),
      json!({"sub_issue_id": 2, "replace_parent": true})
    );
  }

  #[test]
  fn test_reprioritize_request_omits_missing_after_id() {
    assert_eq!(
      serde_json::to_value(ReprioritizeSubIssueRequest::new(2, None)).unwrap(),
      json!({"sub_issue_id": 2})
    );
    assert_eq!(
      serde_json::to_value(ReprioritizeSubIssueRequest::new(2, Some(1))).unwrap(),
      json!({"sub_issue_id": 2, "after_id": 1})
    );
  }
}
