//! # Pre-receive Hooks Command
//!
//! List, inspect, update and remove the pre-receive hook enforcement of a
//! repository.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use hookshot_gh::{Enforcement, PreReceiveHook, parse_repo_slug};
use tracing::debug;

use super::PageArgs;
use crate::context::AppContext;
use crate::utils::output::{
  format_enforcement, hooks_table, print_info, print_json, print_pagination_hint, print_success,
};

/// Command for pre-receive hook management
#[derive(Args)]
pub struct HooksArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: HooksSubcommands,
}

/// Subcommands for the hooks command
#[derive(Subcommand)]
pub enum HooksSubcommands {
  /// List the pre-receive hooks configured for a repository
  #[command(alias = "ls")]
  List {
    /// Repository as owner/repo or a GitHub URL
    repo: String,

    #[command(flatten)]
    page: PageArgs,

    /// Print raw JSON instead of a table
    #[arg(long)]
    json: bool,
  },

  /// Show a single pre-receive hook
  Get {
    /// Repository as owner/repo or a GitHub URL
    repo: String,

    /// Pre-receive hook ID
    id: i64,

    /// Print raw JSON
    #[arg(long)]
    json: bool,
  },

  /// Change the enforcement level of a pre-receive hook
  #[command(long_about = "Change how a pre-receive hook is enforced for a repository.\n\n\
            Only the enforcement field is sent; the server returns the updated hook.")]
  Update {
    /// Repository as owner/repo or a GitHub URL
    repo: String,

    /// Pre-receive hook ID
    id: i64,

    /// New enforcement level
    #[arg(long, value_enum)]
    enforcement: EnforcementArg,

    /// Print raw JSON
    #[arg(long)]
    json: bool,
  },

  /// Remove the repository-level enforcement override of a hook
  #[command(long_about = "Remove the repository-level enforcement override of a pre-receive hook.\n\n\
            The hook falls back to the enforcement inherited from the organization\n\
            or the appliance.")]
  #[command(alias = "rm")]
  Delete {
    /// Repository as owner/repo or a GitHub URL
    repo: String,

    /// Pre-receive hook ID
    id: i64,
  },
}

/// Enforcement levels accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnforcementArg {
  Enabled,
  Disabled,
  Testing,
}

impl From<EnforcementArg> for Enforcement {
  fn from(arg: EnforcementArg) -> Self {
    match arg {
      EnforcementArg::Enabled => Enforcement::Enabled,
      EnforcementArg::Disabled => Enforcement::Disabled,
      EnforcementArg::Testing => Enforcement::Testing,
    }
  }
}

/// Handle the hooks command
pub(crate) fn handle_hooks_command(ctx: &AppContext, args: HooksArgs) -> Result<()> {
  match args.subcommand {
    HooksSubcommands::List { repo, page, json } => handle_list_command(ctx, &repo, page, json),
    HooksSubcommands::Get { repo, id, json } => handle_get_command(ctx, &repo, id, json),
    HooksSubcommands::Update {
      repo,
      id,
      enforcement,
      json,
    } => handle_update_command(ctx, &repo, id, enforcement.into(), json),
    HooksSubcommands::Delete { repo, id } => handle_delete_command(ctx, &repo, id),
  }
}

fn handle_list_command(ctx: &AppContext, repo: &str, page: PageArgs, json: bool) -> Result<()> {
  let (owner, repo) = parse_repo_slug(repo)?;
  let (rt, client) = ctx.runtime_and_client()?;

  let options = page.to_options();
  let (hooks, response) = rt
    .block_on(client.list_pre_receive_hooks(&owner, &repo, options.as_ref()))
    .with_context(|| format!("Failed to list pre-receive hooks for {owner}/{repo}"))?;
  debug!("Fetched {} pre-receive hooks (HTTP {})", hooks.len(), response.status);

  if json {
    return print_json(&hooks);
  }

  if hooks.is_empty() {
    print_info(&format!("No pre-receive hooks found for {owner}/{repo}."));
    return Ok(());
  }

  println!("{}", hooks_table(&hooks));
  print_pagination_hint(&response);
  Ok(())
}

fn handle_get_command(ctx: &AppContext, repo: &str, id: i64, json: bool) -> Result<()> {
  let (owner, repo) = parse_repo_slug(repo)?;
  let (rt, client) = ctx.runtime_and_client()?;

  let (hook, _) = rt
    .block_on(client.get_pre_receive_hook(&owner, &repo, id))
    .with_context(|| format!("Failed to get pre-receive hook {id} for {owner}/{repo}"))?;

  if json {
    return print_json(&hook);
  }

  print_hook_details(&hook);
  Ok(())
}

fn handle_update_command(ctx: &AppContext, repo: &str, id: i64, enforcement: Enforcement, json: bool) -> Result<()> {
  let (owner, repo) = parse_repo_slug(repo)?;
  let (rt, client) = ctx.runtime_and_client()?;

  let update = PreReceiveHook {
    enforcement: Some(enforcement),
    ..Default::default()
  };

  let (hook, _) = rt
    .block_on(client.update_pre_receive_hook(&owner, &repo, id, &update))
    .with_context(|| format!("Failed to update pre-receive hook {id} for {owner}/{repo}"))?;

  if json {
    return print_json(&hook);
  }

  print_success(&format!(
    "Pre-receive hook {id} is now {} for {owner}/{repo}.",
    format_enforcement(hook.enforcement)
  ));
  Ok(())
}

fn handle_delete_command(ctx: &AppContext, repo: &str, id: i64) -> Result<()> {
  let (owner, repo) = parse_repo_slug(repo)?;
  let (rt, client) = ctx.runtime_and_client()?;

  rt.block_on(client.delete_pre_receive_hook(&owner, &repo, id))
    .with_context(|| format!("Failed to delete pre-receive hook {id} for {owner}/{repo}"))?;

  print_success(&format!(
    "Removed the enforcement override of pre-receive hook {id} for {owner}/{repo}."
  ));
  Ok(())
}

fn print_hook_details(hook: &PreReceiveHook) {
  let id = hook.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
  println!("ID:                {id}");
  println!("Name:              {}", hook.name.as_deref().unwrap_or("-"));
  println!("Enforcement:       {}", format_enforcement(hook.enforcement));
  println!("Configuration URL: {}", hook.config_url.as_deref().unwrap_or("-"));
}
