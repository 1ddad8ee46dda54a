//! Constants for the hookshot-gh client

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!("hookshot/", env!("CARGO_PKG_VERSION"));

/// Default Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Media type required while the repository pre-receive hooks API is in
/// preview.
pub const MEDIA_TYPE_PRE_RECEIVE_HOOKS_PREVIEW: &str = "application/vnd.github.eye-scream-preview";

/// Media type sent with sub-issue requests while that API is in preview.
pub const MEDIA_TYPE_SUB_ISSUES_PREVIEW: &str = "application/vnd.github.squirrel-girl-preview";
