//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for hookshot.

mod config;
mod creds;
mod hooks;
mod sub_issues;

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Args, Parser, Subcommand};
use hookshot_gh::ListOptions;

use crate::context::AppContext;
use crate::utils::output::ColorMode;

/// Top-level CLI command for hookshot
#[derive(Parser)]
#[command(name = "hookshot")]
#[command(about = "Manage GitHub pre-receive hook enforcement and sub-issues")]
#[command(
  long_about = "Hookshot talks to the GitHub REST API (GitHub.com or Enterprise Server)\n\n\
        to manage repository pre-receive hook enforcement and the sub-issues\n\
        attached to an issue. Credentials are read from your .netrc file."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(long, value_enum, ignore_case = true, global = true, default_value_t = ColorMode::Auto)]
  pub colors: ColorMode,

  /// Path to an alternative config file
  #[arg(long, value_name = "PATH", global = true)]
  pub config: Option<PathBuf>,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for hookshot
#[derive(Subcommand)]
pub enum Commands {
  /// Show the effective configuration
  #[command(long_about = "Show the configuration hookshot will use.\n\n\
            Values come from the config file, overridden by the\n\
            HOOKSHOT_GITHUB_API_URL and HOOKSHOT_TIMEOUT_SECS environment variables.")]
  Config(config::ConfigArgs),

  /// Credential management
  #[command(long_about = "Check and set up GitHub credentials.\n\n\
            Credentials are stored in your .netrc file under the host of the\n\
            configured API URL (github.com for the public API).")]
  #[command(arg_required_else_help = true)]
  Creds(creds::CredsArgs),

  /// Repository pre-receive hook enforcement
  #[command(long_about = "List, inspect, update and remove pre-receive hook enforcement\n\
            for a repository. Pre-receive hooks are a GitHub Enterprise Server feature.")]
  #[command(alias = "hook")]
  Hooks(hooks::HooksArgs),

  /// Sub-issue management
  #[command(long_about = "Attach, detach, list and reorder the sub-issues of an issue.")]
  #[command(alias = "sub")]
  SubIssues(sub_issues::SubIssuesArgs),
}

/// Pagination flags shared by list commands
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
  /// Page number to fetch
  #[arg(long)]
  pub page: Option<u32>,

  /// Number of results per page
  #[arg(long = "per-page")]
  pub per_page: Option<u32>,
}

impl PageArgs {
  pub(crate) fn to_options(self) -> Option<ListOptions> {
    if self.page.is_none() && self.per_page.is_none() {
      return None;
    }
    Some(ListOptions {
      page: self.page,
      per_page: self.per_page,
    })
  }
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  match cli.colors {
    ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
    ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
    ColorMode::Auto => {}
  }

  let ctx = AppContext::load(cli.config.as_deref())?;

  match cli.command {
    Commands::Config(args) => config::handle_config_command(&ctx, args),
    Commands::Creds(args) => creds::handle_creds_command(&ctx, args),
    Commands::Hooks(args) => hooks::handle_hooks_command(&ctx, args),
    Commands::SubIssues(args) => sub_issues::handle_sub_issues_command(&ctx, args),
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_page_args_to_options() {
    let none = PageArgs {
      page: None,
      per_page: None,
    };
    assert_eq!(none.to_options(), None);

    let some = PageArgs {
      page: Some(2),
      per_page: None,
    };
    assert_eq!(some.to_options(), Some(ListOptions::new().page(2)));
  }
}
