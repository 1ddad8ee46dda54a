//! # Response Descriptor
//!
//! Transport-level metadata returned alongside every decoded payload:
//! status, headers, pagination cursors from the `Link` header and the rate
//! limit reported by GitHub.

use chrono::{DateTime, TimeZone, Utc};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, LINK};
use tracing::trace;
use url::Url;

const RATE_LIMIT_HEADER: &str = "x-ratelimit-limit";
const RATE_REMAINING_HEADER: &str = "x-ratelimit-remaining";
const RATE_RESET_HEADER: &str = "x-ratelimit-reset";

/// Rate limit state reported with a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rate {
  /// Requests allowed per window
  pub limit: u64,
  /// Requests left in the current window
  pub remaining: u64,
  /// When the current window resets
  pub reset: Option<DateTime<Utc>>,
}

/// Metadata about an HTTP response from the GitHub API
#[derive(Debug, Clone)]
pub struct Response {
  pub status: StatusCode,
  pub headers: HeaderMap,
  pub next_page: Option<u32>,
  pub prev_page: Option<u32>,
  pub first_page: Option<u32>,
  pub last_page: Option<u32>,
  pub rate: Option<Rate>,
}

impl Response {
  /// Build a descriptor from a status and header map.
  pub fn from_parts(status: StatusCode, headers: HeaderMap) -> Self {
    let mut response = Self {
      status,
      next_page: None,
      prev_page: None,
      first_page: None,
      last_page: None,
      rate: parse_rate(&headers),
      headers,
    };
    response.populate_page_values();
    response
  }

  pub(crate) fn from_reqwest(response: &reqwest::Response) -> Self {
    Self::from_parts(response.status(), response.headers().clone())
  }

  /// Whether the `Link` header points at another page.
  pub fn has_next_page(&self) -> bool {
    self.next_page.is_some()
  }

  fn populate_page_values(&mut self) {
    let Some(link) = self.headers.get(LINK).and_then(|v| v.to_str().ok()) else {
      return;
    };

    for (rel, page) in parse_link_header(link) {
      match rel.as_str() {
        "next" => self.next_page = Some(page),
        "prev" => self.prev_page = Some(page),
        "first" => self.first_page = Some(page),
        "last" => self.last_page = Some(page),
        other => trace!("Ignoring Link relation {}", other),
      }
    }
  }
}

/// Parse a GitHub `Link` header into `(rel, page)` pairs.
///
/// Entries without a `page` query parameter or a `rel` are skipped.
pub fn parse_link_header(value: &str) -> Vec<(String, u32)> {
  value
    .split(',')
    .filter_map(|entry| {
      let mut segments = entry.split(';').map(str::trim);
      let target = segments.next()?.strip_prefix('<')?.strip_suffix('>')?;
      let url = Url::parse(target).ok()?;
      let page = url
        .query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse::<u32>().ok())?;

      let rel = segments.find_map(|param| {
        param
          .strip_prefix("rel=")
          .map(|rel| rel.trim_matches('"').to_string())
      })?;

      Some((rel, page))
    })
    .collect()
}

fn parse_rate(headers: &HeaderMap) -> Option<Rate> {
  let header_u64 = |name: &str| headers.get(name)?.to_str().ok()?.parse::<u64>().ok();

  let limit = header_u64(RATE_LIMIT_HEADER)?;
  let remaining = header_u64(RATE_REMAINING_HEADER)?;
  let reset = header_u64(RATE_RESET_HEADER)
    .and_then(|secs| i64::try_from(secs).ok())
    .and_then(|secs| Utc.timestamp_opt(secs, 0).single());

  Some(Rate {
    limit,
    remaining,
    reset,
  })
}
