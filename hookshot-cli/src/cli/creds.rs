//! # Credentials Command
//!
//! Check and set up the `.netrc` credentials hookshot uses to authenticate
//! against the configured GitHub API.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password};
use hookshot_core::creds::netrc::{get_netrc_path, write_netrc_entry};
use hookshot_gh::auth::check_github_credentials;
use hookshot_gh::{GitHubAuth, GitHubClient};
use tokio::runtime::Runtime;

use crate::context::AppContext;
use crate::utils::output::{format_command, format_path, print_error, print_info, print_success, print_warning};

/// Command for credential management
#[derive(Args)]
pub struct CredsArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: CredsSubcommands,
}

/// Subcommands for the creds command
#[derive(Subcommand)]
pub enum CredsSubcommands {
  /// Check if credentials are properly configured
  #[command(long_about = "Checks that your .netrc file holds credentials for the configured\n\
            GitHub API host and that the file is not readable by other users.\n\n\
            Pass --verify to also make an authenticated request.")]
  Check {
    /// Make an authenticated request to confirm the credentials work
    #[arg(long)]
    verify: bool,
  },

  /// Store credentials for the configured API host
  #[command(long_about = "Store GitHub credentials in your .netrc file.\n\n\
            Missing values are prompted for interactively. The token should be a\n\
            personal access token with access to the repositories you manage.")]
  Setup {
    /// GitHub username
    #[arg(long)]
    username: Option<String>,

    /// Personal access token
    #[arg(long)]
    token: Option<String>,

    /// Skip the connection test before saving
    #[arg(long)]
    no_verify: bool,
  },
}

/// Handle the creds command
pub(crate) fn handle_creds_command(ctx: &AppContext, args: CredsArgs) -> Result<()> {
  match args.subcommand {
    CredsSubcommands::Check { verify } => handle_check_command(ctx, verify),
    CredsSubcommands::Setup {
      username,
      token,
      no_verify,
    } => handle_setup_command(ctx, username, token, !no_verify),
  }
}

fn handle_check_command(ctx: &AppContext, verify: bool) -> Result<()> {
  let config = ctx.config()?;
  let netrc_path = get_netrc_path(&ctx.home);
  let machine = config.github.netrc_machine();

  if !netrc_path.exists() {
    print_error("No .netrc file found.");
    println!(
      "Create a .netrc file at {} or run {}.",
      format_path(&netrc_path.display().to_string()),
      format_command("hookshot creds setup")
    );
    return Ok(());
  }

  check_permissions(&netrc_path)?;

  match check_github_credentials(&ctx.home, &machine) {
    Ok(true) => print_success(&format!("GitHub credentials found for machine '{machine}'.")),
    Ok(false) => {
      print_warning(&format!("No GitHub credentials found for machine '{machine}'."));
      print_info("Example .netrc entry:");
      println!("machine {machine}");
      println!("  login your-github-username");
      println!("  password your-personal-access-token");
      return Ok(());
    }
    Err(e) => {
      print_error(&format!("Error checking GitHub credentials: {e}"));
      return Ok(());
    }
  }

  if verify {
    let (rt, client) = ctx.runtime_and_client()?;
    match rt.block_on(client.test_connection()) {
      Ok(true) => print_success(&format!("Authenticated against {}.", client.base_url())),
      Ok(false) => print_error("GitHub rejected the stored credentials."),
      Err(e) => print_error(&format!("Could not reach {}: {e}", client.base_url())),
    }
  }

  Ok(())
}

#[cfg(unix)]
fn check_permissions(netrc_path: &std::path::Path) -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  let mode = std::fs::metadata(netrc_path)
    .with_context(|| format!("Failed to read metadata of {}", netrc_path.display()))?
    .permissions()
    .mode();

  if mode & 0o077 != 0 {
    print_warning("Your .netrc file has insecure permissions.");
    println!(
      "For security, change permissions to 600: {}",
      format_command(&format!("chmod 600 {}", netrc_path.display()))
    );
  } else {
    print_success(".netrc file has secure permissions.");
  }
  Ok(())
}

#[cfg(not(unix))]
fn check_permissions(_netrc_path: &std::path::Path) -> Result<()> {
  Ok(())
}

fn handle_setup_command(ctx: &AppContext, username: Option<String>, token: Option<String>, verify: bool) -> Result<()> {
  let config = ctx.config()?;
  let netrc_path = get_netrc_path(&ctx.home);
  let machine = config.github.netrc_machine();
  let theme = ColorfulTheme::default();
  let interactive = username.is_none() || token.is_none();

  if interactive {
    print_info(&format!(
      "Credentials for '{machine}' will be stored in {}",
      format_path(&netrc_path.display().to_string())
    ));
  }

  if interactive && check_github_credentials(&ctx.home, &machine)? {
    let replace = Confirm::with_theme(&theme)
      .with_prompt(format!("Credentials for '{machine}' already exist. Replace them?"))
      .default(false)
      .interact()?;
    if !replace {
      print_info("Setup cancelled.");
      return Ok(());
    }
  }

  let username = match username {
    Some(username) => username,
    None => Input::<String>::with_theme(&theme)
      .with_prompt("GitHub username")
      .interact_text()?,
  };
  let token = match token {
    Some(token) => token,
    None => Password::with_theme(&theme)
      .with_prompt("Personal access token")
      .interact()?,
  };

  let username = username.trim().to_string();
  let token = token.trim().to_string();
  if username.is_empty() || token.is_empty() {
    anyhow::bail!("Username and token must not be empty");
  }

  if verify {
    print_info("Validating GitHub credentials...");
    let rt = Runtime::new().context("Failed to create async runtime")?;
    let auth = GitHubAuth {
      username: username.clone(),
      token: token.clone(),
    };
    let client = GitHubClient::with_settings(&config.github, auth)?;
    match rt.block_on(client.test_connection()) {
      Ok(true) => print_success("GitHub credentials validated successfully!"),
      Ok(false) => {
        print_error("GitHub rejected these credentials. Nothing was saved.");
        println!(
          "Re-run with {} to store them anyway.",
          format_command("hookshot creds setup --no-verify")
        );
        return Ok(());
      }
      Err(e) => {
        print_error(&format!("Error validating GitHub credentials: {e}"));
        return Ok(());
      }
    }
  }

  write_netrc_entry(&netrc_path, &machine, &username, &token)?;
  print_success(&format!("Saved credentials for '{machine}'."));
  Ok(())
}
