
use wiremock::MockServer;

use crate::client::GitHubClient;
use crate::models::GitHubAuth;

/// Build a client pointed at the mock server
fn mock_client(mock_server: &MockServer) -> GitHubClient {
  let auth = GitHubAuth {
    username: "test_user".to_string(),
    token: "test_token".to_string(),
  };
  GitHubClient::with_base_url(&mock_server.uri(), auth)
}
