//! Pagination options shared by list endpoints.

use serde::Serialize;

/// Page selection for list endpoints, sent as `page` and `per_page` query
/// parameters. Unset fields are left off the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub page: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub per_page: Option<u32>,
}

impl ListOptions {
  pub const fn new() -> Self {
    Self {
      page: None,
      per_page: None,
    }
  }

  pub const fn page(mut self, page: u32) -> Self {
    self.page = Some(page);
    self
  }

  pub const fn per_page(mut self, per_page: u32) -> Self {
    self.per_page = Some(per_page);
    self
  }
}
