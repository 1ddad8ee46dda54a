//! # Sub-issues Command
//!
//! Attach, detach, list and reorder the sub-issues of an issue.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use hookshot_gh::{AddSubIssueRequest, ReprioritizeSubIssueRequest, SubIssue, parse_repo_slug};

use super::PageArgs;
use crate::context::AppContext;
use crate::utils::output::{print_info, print_json, print_pagination_hint, print_success, sub_issues_table};

/// Command for sub-issue management
#[derive(Args)]
pub struct SubIssuesArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: SubIssuesSubcommands,
}

/// Subcommands for the sub-issues command
#[derive(Subcommand)]
pub enum SubIssuesSubcommands {
  /// Attach an issue as a sub-issue
  #[command(long_about = "Attach an existing issue as a sub-issue of ISSUE.\n\n\
            SUB_ISSUE_ID is the issue's database id, not its number. Use\n\
            --replace-parent to move an issue that already has a parent.")]
  Add {
    /// Repository as owner/repo or a GitHub URL
    repo: String,

    /// Number of the parent issue
    issue: u64,

    /// Database id of the issue to attach
    sub_issue_id: i64,

    /// Move the sub-issue even if it already has a parent
    #[arg(long)]
    replace_parent: bool,

    /// Print raw JSON
    #[arg(long)]
    json: bool,
  },

  /// Detach a sub-issue
  #[command(alias = "rm")]
  Remove {
    /// Repository as owner/repo or a GitHub URL
    repo: String,

    /// Number of the parent issue
    issue: u64,

    /// Database id of the sub-issue to detach
    sub_issue_id: i64,
  },

  /// List sub-issues in priority order
  #[command(alias = "ls")]
  List {
    /// Repository as owner/repo or a GitHub URL
    repo: String,

    /// Number of the parent issue
    issue: u64,

    #[command(flatten)]
    page: PageArgs,

    /// Print raw JSON instead of a table
    #[arg(long)]
    json: bool,
  },

  /// Move a sub-issue within the priority list
  #[command(long_about = "Move a sub-issue within the priority list of ISSUE.\n\n\
            Without --after the sub-issue moves to the top of the list.")]
  Reprioritize {
    /// Repository as owner/repo or a GitHub URL
    repo: String,

    /// Number of the parent issue
    issue: u64,

    /// Database id of the sub-issue to move
    sub_issue_id: i64,

    /// Place the sub-issue directly after this one
    #[arg(long, value_name = "SUB_ISSUE_ID")]
    after: Option<i64>,

    /// Print raw JSON
    #[arg(long)]
    json: bool,
  },
}

/// Handle the sub-issues command
pub(crate) fn handle_sub_issues_command(ctx: &AppContext, args: SubIssuesArgs) -> Result<()> {
  match args.subcommand {
    SubIssuesSubcommands::Add {
      repo,
      issue,
      sub_issue_id,
      replace_parent,
      json,
    } => {
      let mut body = AddSubIssueRequest::new(sub_issue_id);
      if replace_parent {
        body.replace_parent = Some(true);
      }
      handle_add_command(ctx, &repo, issue, &body, json)
    }
    SubIssuesSubcommands::Remove {
      repo,
      issue,
      sub_issue_id,
    } => handle_remove_command(ctx, &repo, issue, sub_issue_id),
    SubIssuesSubcommands::List {
      repo,
      issue,
      page,
      json,
    } => handle_list_command(ctx, &repo, issue, page, json),
    SubIssuesSubcommands::Reprioritize {
      repo,
      issue,
      sub_issue_id,
      after,
      json,
    } => handle_reprioritize_command(
      ctx,
      &repo,
      issue,
      &ReprioritizeSubIssueRequest::new(sub_issue_id, after),
      json,
    ),
  }
}

fn handle_add_command(ctx: &AppContext, repo: &str, issue: u64, body: &AddSubIssueRequest, json: bool) -> Result<()> {
  let (owner, repo) = parse_repo_slug(repo)?;
  let (rt, client) = ctx.runtime_and_client()?;

  let (sub_issue, _) = rt
    .block_on(client.add_sub_issue(&owner, &repo, issue, body))
    .with_context(|| format!("Failed to add sub-issue {} to #{issue} in {owner}/{repo}", body.sub_issue_id))?;

  if json {
    return print_json(&sub_issue);
  }

  print_success(&format!(
    "Added {} as a sub-issue of #{issue} in {owner}/{repo}.",
    describe(&sub_issue, body.sub_issue_id)
  ));
  Ok(())
}

fn handle_remove_command(ctx: &AppContext, repo: &str, issue: u64, sub_issue_id: i64) -> Result<()> {
  let (owner, repo) = parse_repo_slug(repo)?;
  let (rt, client) = ctx.runtime_and_client()?;

  rt.block_on(client.remove_sub_issue(&owner, &repo, issue, sub_issue_id))
    .with_context(|| format!("Failed to remove sub-issue {sub_issue_id} from #{issue} in {owner}/{repo}"))?;

  print_success(&format!(
    "Removed sub-issue {sub_issue_id} from #{issue} in {owner}/{repo}."
  ));
  Ok(())
}

fn handle_list_command(ctx: &AppContext, repo: &str, issue: u64, page: PageArgs, json: bool) -> Result<()> {
  let (owner, repo) = parse_repo_slug(repo)?;
  let (rt, client) = ctx.runtime_and_client()?;

  let options = page.to_options();
  let (sub_issues, response) = rt
    .block_on(client.list_sub_issues(&owner, &repo, issue, options.as_ref()))
    .with_context(|| format!("Failed to list sub-issues of #{issue} in {owner}/{repo}"))?;

  if json {
    return print_json(&sub_issues);
  }

  if sub_issues.is_empty() {
    print_info(&format!("Issue #{issue} in {owner}/{repo} has no sub-issues."));
    return Ok(());
  }

  println!("{}", sub_issues_table(&sub_issues));
  print_pagination_hint(&response);
  Ok(())
}

fn handle_reprioritize_command(
  ctx: &AppContext,
  repo: &str,
  issue: u64,
  body: &ReprioritizeSubIssueRequest,
  json: bool,
) -> Result<()> {
  let (owner, repo) = parse_repo_slug(repo)?;
  let (rt, client) = ctx.runtime_and_client()?;

  let (sub_issue, _) = rt
    .block_on(client.reprioritize_sub_issue(&owner, &repo, issue, body))
    .with_context(|| format!("Failed to reprioritize sub-issue {} on #{issue} in {owner}/{repo}", body.sub_issue_id))?;

  if json {
    return print_json(&sub_issue);
  }

  let target = describe(&sub_issue, body.sub_issue_id);
  match body.after_id {
    Some(after) => print_success(&format!("Moved {target} after sub-issue {after} on #{issue}.")),
    None => print_success(&format!("Moved {target} to the top of #{issue}.")),
  }
  Ok(())
}

/// Short label for a sub-issue, preferring its number and title
fn describe(issue: &SubIssue, fallback_id: i64) -> String {
  match (issue.number, issue.title.as_deref()) {
    (Some(number), Some(title)) => format!("#{number} ({title})"),
    (Some(number), None) => format!("#{number}"),
    _ => format!("issue {fallback_id}"),
  }
}
