//! End-to-end tests for the `hookshot` binary against a mock GitHub API.

use assert_cmd::Command;
use hookshot_test_utils::TestHome;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUB_ISSUES_PREVIEW: &str = "application/vnd.github.squirrel-girl-preview";
const HOOKS_PREVIEW: &str = "application/vnd.github.eye-scream-preview";

/// Build a `hookshot` command isolated in `home` and pointed at `api_url`
fn hookshot(home: &TestHome, api_url: &str) -> Command {
  let mut cmd = Command::cargo_bin("hookshot").unwrap();
  for (key, value) in home.envs() {
    cmd.env(key, value);
  }
  cmd.env("HOOKSHOT_GITHUB_API_URL", api_url);
  cmd.env_remove("HOOKSHOT_TIMEOUT_SECS");
  cmd.arg("--colors").arg("never");
  cmd
}

/// A home whose `.netrc` holds credentials for the mock server's host
fn home_with_credentials() -> TestHome {
  let home = TestHome::new();
  home.write_netrc("machine 127.0.0.1\n  login octo\n  password tok\n");
  home
}

#[test]
fn test_help_lists_commands() {
  let home = TestHome::new();
  hookshot(&home, "http://127.0.0.1:9")
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("hooks"))
    .stdout(predicate::str::contains("sub-issues"))
    .stdout(predicate::str::contains("creds"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_hooks_list_json() {
  let mock_server = MockServer::start().await;
  let home = home_with_credentials();

  Mock::given(method("GET"))
    .and(path("/repos/octo/widgets/pre-receive-hooks"))
    .and(header("accept", HOOKS_PREVIEW))
    .and(header("authorization", "Basic b2N0bzp0b2s="))
    .and(query_param("per_page", "5"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {"id": 42, "name": "Check Commits", "enforcement": "disabled", "configuration_url": "https://ghe/hooks/42"}
    ])))
    .expect(1)
    .mount(&mock_server)
    .await;

  let output = hookshot(&home, &mock_server.uri())
    .args(["hooks", "list", "octo/widgets", "--per-page", "5", "--json"])
    .output()
    .unwrap();

  assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
  let hooks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(hooks[0]["id"], 42);
  assert_eq!(hooks[0]["enforcement"], "disabled");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_hooks_update_sends_enforcement_only() {
  let mock_server = MockServer::start().await;
  let home = home_with_credentials();

  Mock::given(method("PATCH"))
    .and(path("/repos/octo/widgets/pre-receive-hooks/42"))
    .and(body_json(json!({"enforcement": "testing"})))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "id": 42, "name": "Check Commits", "enforcement": "testing"
    })))
    .expect(1)
    .mount(&mock_server)
    .await;

  hookshot(&home, &mock_server.uri())
    .args(["hooks", "update", "https://github.com/octo/widgets", "42", "--enforcement", "testing"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Pre-receive hook 42 is now testing"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_hooks_delete() {
  let mock_server = MockServer::start().await;
  let home = home_with_credentials();

  Mock::given(method("DELETE"))
    .and(path("/repos/octo/widgets/pre-receive-hooks/42"))
    .respond_with(ResponseTemplate::new(204))
    .expect(1)
    .mount(&mock_server)
    .await;

  hookshot(&home, &mock_server.uri())
    .args(["hooks", "delete", "octo/widgets", "42"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed the enforcement override"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sub_issues_list_table_keeps_priority_order() {
  let mock_server = MockServer::start().await;
  let home = home_with_credentials();

  Mock::given(method("GET"))
    .and(path("/repos/octo/widgets/issues/7/sub_issues"))
    .and(header("accept", SUB_ISSUES_PREVIEW))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {"id": 300, "number": 3, "title": "Write docs", "state": "open"},
      {"id": 100, "number": 1, "title": "Fix parser", "state": "closed"}
    ])))
    .mount(&mock_server)
    .await;

  let output = hookshot(&home, &mock_server.uri())
    .args(["sub-issues", "list", "octo/widgets", "7"])
    .output()
    .unwrap();

  assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
  let stdout = String::from_utf8_lossy(&output.stdout);
  let docs = stdout.find("Write docs").unwrap();
  let parser = stdout.find("Fix parser").unwrap();
  assert!(docs < parser);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sub_issues_add_with_replace_parent() {
  let mock_server = MockServer::start().await;
  let home = home_with_credentials();

  Mock::given(method("POST"))
    .and(path("/repos/octo/widgets/issues/7/sub_issues"))
    .and(body_json(json!({"sub_issue_id": 300, "replace_parent": true})))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({
      "id": 300, "number": 3, "title": "Write docs"
    })))
    .expect(1)
    .mount(&mock_server)
    .await;

  hookshot(&home, &mock_server.uri())
    .args(["sub-issues", "add", "octo/widgets", "7", "300", "--replace-parent"])
    .assert()
    .success()
    .stdout(predicate::str::contains("#3 (Write docs)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sub_issues_reprioritize_to_top_omits_after_id() {
  let mock_server = MockServer::start().await;
  let home = home_with_credentials();

  Mock::given(method("POST"))
    .and(path("/repos/octo/widgets/issues/7/sub_issues/priority"))
    .and(body_json(json!({"sub_issue_id": 100})))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 100, "number": 1})))
    .expect(1)
    .mount(&mock_server)
    .await;

  hookshot(&home, &mock_server.uri())
    .args(["sub-issues", "reprioritize", "octo/widgets", "7", "100"])
    .assert()
    .success()
    .stdout(predicate::str::contains("to the top of #7"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_error_is_reported() {
  let mock_server = MockServer::start().await;
  let home = home_with_credentials();

  Mock::given(method("DELETE"))
    .and(path("/repos/octo/widgets/issues/7/sub_issues/300"))
    .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
    .mount(&mock_server)
    .await;

  hookshot(&home, &mock_server.uri())
    .args(["sub-issues", "remove", "octo/widgets", "7", "300"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("404"))
    .stderr(predicate::str::contains("Not Found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_repo_makes_no_request() {
  let mock_server = MockServer::start().await;
  let home = home_with_credentials();

  Mock::given(any())
    .respond_with(ResponseTemplate::new(200))
    .expect(0)
    .mount(&mock_server)
    .await;

  hookshot(&home, &mock_server.uri())
    .args(["hooks", "list", "not-a-repo"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Could not extract owner and repo"));
}

#[test]
fn test_missing_credentials_points_to_setup() {
  let home = TestHome::new();

  hookshot(&home, "http://127.0.0.1:9")
    .args(["hooks", "list", "octo/widgets"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("hookshot creds setup"));
}

#[test]
fn test_creds_setup_writes_netrc_for_api_host() {
  let home = TestHome::new();

  hookshot(&home, "https://ghe.example.com/api/v3")
    .args(["creds", "setup", "--username", "octo", "--token", "tok", "--no-verify"])
    .assert()
    .success();

  let netrc = std::fs::read_to_string(home.home_path(".netrc")).unwrap();
  assert!(netrc.contains("machine ghe.example.com"));
  assert!(netrc.contains("octo"));
  assert!(netrc.contains("tok"));
}

#[test]
fn test_creds_check_reports_missing_machine() {
  let home = TestHome::new();
  home.write_netrc("machine github.com\n  login octo\n  password tok\n");

  hookshot(&home, "https://ghe.example.com/api/v3")
    .args(["creds", "check"])
    .assert()
    .success()
    .stdout(predicate::str::contains("No GitHub credentials found for machine 'ghe.example.com'"));
}

#[test]
fn test_config_show_reflects_env_override() {
  let home = TestHome::new();

  hookshot(&home, "https://ghe.example.com/api/v3")
    .args(["config", "show"])
    .assert()
    .success()
    .stdout(predicate::str::contains("api_url = \"https://ghe.example.com/api/v3\""))
    .stdout(predicate::str::contains("Credentials machine: ghe.example.com"));
}

#[test]
fn test_config_init_writes_file() {
  let home = TestHome::new();
  let config_path = home.home_path("custom/hookshot.toml");

  hookshot(&home, "https://api.github.com")
    .arg("--config")
    .arg(&config_path)
    .args(["config", "init"])
    .assert()
    .success();

  let content = std::fs::read_to_string(&config_path).unwrap();
  assert!(content.contains("api_url = \"https://api.github.com\""));
}

#[test]
fn test_config_init_force_replaces_malformed_file() {
  let home = TestHome::new();
  let config_path = home.home_path("bad.toml");
  std::fs::write(&config_path, "[github\napi_url = ").unwrap();

  hookshot(&home, "https://api.github.com")
    .arg("--config")
    .arg(&config_path)
    .args(["config", "init", "--force"])
    .assert()
    .success();

  let content = std::fs::read_to_string(&config_path).unwrap();
  assert!(content.contains("[github]"));
  assert!(content.contains("api_url = \"https://api.github.com\""));
}

#[test]
fn test_config_show_reports_malformed_file() {
  let home = TestHome::new();
  let config_path = home.home_path("bad.toml");
  std::fs::write(&config_path, "[github\napi_url = ").unwrap();

  hookshot(&home, "https://api.github.com")
    .arg("--config")
    .arg(&config_path)
    .args(["config", "show"])
    .assert()
    .failure()
    .stdout(predicate::str::contains("bad.toml"))
    .stderr(predicate::str::contains("Failed to parse config"));
}
