//! # Config Command
//!
//! Show or write the configuration file.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use hookshot_core::config::HookshotConfig;

use crate::context::AppContext;
use crate::utils::output::{format_path, print_info, print_success, print_warning};

/// Command for configuration
#[derive(Args)]
pub struct ConfigArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: Option<ConfigSubcommands>,
}

/// Subcommands for the config command
#[derive(Subcommand)]
pub enum ConfigSubcommands {
  /// Print the effective configuration as TOML
  Show,

  /// Write a configuration file with default settings
  Init {
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
  },
}

/// Handle the config command
pub(crate) fn handle_config_command(ctx: &AppContext, args: ConfigArgs) -> Result<()> {
  match args.subcommand.unwrap_or(ConfigSubcommands::Show) {
    ConfigSubcommands::Show => handle_show_command(ctx),
    ConfigSubcommands::Init { force } => handle_init_command(ctx, force),
  }
}

fn handle_show_command(ctx: &AppContext) -> Result<()> {
  let path = ctx.config_path.display().to_string();
  if ctx.config_path.exists() {
    print_info(&format!("Config file: {}", format_path(&path)));
  } else {
    print_info(&format!("Config file: {} (not present, using defaults)", format_path(&path)));
  }

  let config = ctx.config()?;
  println!("Credentials machine: {}", config.github.netrc_machine());
  println!();

  let rendered = toml::to_string_pretty(&config).context("Failed to serialize config to TOML")?;
  print!("{rendered}");
  Ok(())
}

fn handle_init_command(ctx: &AppContext, force: bool) -> Result<()> {
  let path = &ctx.config_path;
  if path.exists() && !force {
    print_warning(&format!(
      "{} already exists. Use --force to overwrite it.",
      format_path(&path.display().to_string())
    ));
    return Ok(());
  }

  HookshotConfig::default().save_to(path)?;
  print_success(&format!(
    "Wrote default configuration to {}",
    format_path(&path.display().to_string())
  ));
  Ok(())
}
