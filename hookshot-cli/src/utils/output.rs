//! # Output Formatting
//!
//! Colored status messages, tables and JSON output for CLI commands.

use anyhow::{Context, Result};
use hookshot_gh::{Enforcement, PreReceiveHook, Response, SubIssue};
use owo_colors::{OwoColorize, Stream, Style};
use serde::Serialize;
use tabled::settings::Style as TableStyle;
use tabled::{Table, Tabled};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

/// Helper function to safely get an emoji or fallback to a default character
fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Apply `style` when `stream` supports colors (or colors are forced on)
fn paint(text: &str, style: Style, stream: Stream) -> String {
  text.if_supports_color(stream, |t| t.style(style)).to_string()
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", paint(&check, Style::new().green().bold(), Stream::Stdout), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", paint(&cross, Style::new().red().bold(), Stream::Stderr), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", paint(&warning, Style::new().yellow().bold(), Stream::Stdout), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", paint(&info, Style::new().blue().bold(), Stream::Stdout), message);
}

/// Format a path for display
pub fn format_path(path: &str) -> String {
  paint(path, Style::new().bright_green(), Stream::Stdout)
}

/// Format a command or command example
pub fn format_command(cmd: &str) -> String {
  paint(cmd, Style::new().purple(), Stream::Stdout)
}

/// Format a pre-receive hook enforcement level
pub fn format_enforcement(enforcement: Option<Enforcement>) -> String {
  match enforcement {
    Some(Enforcement::Enabled) => paint("enabled", Style::new().green(), Stream::Stdout),
    Some(Enforcement::Disabled) => paint("disabled", Style::new().red(), Stream::Stdout),
    Some(Enforcement::Testing) => paint("testing", Style::new().yellow(), Stream::Stdout),
    Some(Enforcement::Unknown) => paint("unknown", Style::new().dimmed(), Stream::Stdout),
    None => "-".to_string(),
  }
}

/// Format an issue state
pub fn format_issue_state(state: Option<&str>) -> String {
  match state {
    Some("open") => paint("open", Style::new().green(), Stream::Stdout),
    Some("closed") => paint("closed", Style::new().purple(), Stream::Stdout),
    Some(other) => other.to_string(),
    None => "-".to_string(),
  }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")?;
  println!("{json}");
  Ok(())
}

/// Mention that more results are available
pub fn print_pagination_hint(response: &Response) {
  if let Some(next) = response.next_page {
    let last = response.last_page.map(|l| format!(" of {l}")).unwrap_or_default();
    print_info(&format!(
      "More results available: use {} (page {next}{last})",
      format_command(&format!("--page {next}"))
    ));
  }
}

#[derive(Tabled)]
struct HookRow {
  #[tabled(rename = "ID")]
  id: String,
  #[tabled(rename = "Name")]
  name: String,
  #[tabled(rename = "Enforcement")]
  enforcement: String,
  #[tabled(rename = "Configuration URL")]
  config_url: String,
}

impl From<&PreReceiveHook> for HookRow {
  fn from(hook: &PreReceiveHook) -> Self {
    Self {
      id: hook.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
      name: hook.name.clone().unwrap_or_default(),
      enforcement: format_enforcement(hook.enforcement),
      config_url: hook.config_url.clone().unwrap_or_default(),
    }
  }
}

#[derive(Tabled)]
struct SubIssueRow {
  #[tabled(rename = "#")]
  number: String,
  #[tabled(rename = "ID")]
  id: String,
  #[tabled(rename = "State")]
  state: String,
  #[tabled(rename = "Title")]
  title: String,
}

impl From<&SubIssue> for SubIssueRow {
  fn from(issue: &SubIssue) -> Self {
    Self {
      number: issue.number.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string()),
      id: issue.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
      state: format_issue_state(issue.state.as_deref()),
      title: issue.title.clone().unwrap_or_default(),
    }
  }
}

/// Render pre-receive hooks as a table
pub fn hooks_table(hooks: &[PreReceiveHook]) -> String {
  let mut table = Table::new(hooks.iter().map(HookRow::from));
  table.with(TableStyle::rounded());
  table.to_string()
}

/// Render sub-issues as a table, preserving their order
pub fn sub_issues_table(issues: &[SubIssue]) -> String {
  let mut table = Table::new(issues.iter().map(SubIssueRow::from));
  table.with(TableStyle::rounded());
  table.to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_hooks_table_contains_rows() {
    owo_colors::set_override(false);
    let hooks = vec![PreReceiveHook {
      id: Some(42),
      name: Some("Check Commits".to_string()),
      enforcement: Some(Enforcement::Testing),
      config_url: None,
    }];

    let table = hooks_table(&hooks);

    assert!(table.contains("42"));
    assert!(table.contains("Check Commits"));
    assert!(table.contains("testing"));
  }

  #[test]
  fn test_sub_issues_table_preserves_order() {
    owo_colors::set_override(false);
    let issues = vec![
      SubIssue {
        number: Some(7),
        title: Some("first".to_string()),
        ..Default::default()
      },
      SubIssue {
        number: Some(3),
        title: Some("second".to_string()),
        ..Default::default()
      },
    ];

    let table = sub_issues_table(&issues);

    let first = table.find("first").unwrap();
    let second = table.find("second").unwrap();
    assert!(first < second);
  }

  #[test]
  fn test_tables_use_rounded_borders() {
    owo_colors::set_override(false);
    let table = hooks_table(&[PreReceiveHook::default()]);

    assert!(table.starts_with('╭'));
  }
}
