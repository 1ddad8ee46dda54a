//! Helpers for reading and writing credentials stored in `.netrc` files.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::creds::Credentials;

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use hookshot_core::creds::netrc::get_netrc_path;
///
/// let path = get_netrc_path(Path::new("/home/user"));
/// assert_eq!(path, Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// Both single-line (`machine host login user password pass`) and
/// multi-line entries are understood. A missing machine, or one without both
/// `login` and `password`, yields `Ok(None)`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  let file = File::open(path).context("Failed to open .netrc file")?;
  let reader = BufReader::new(file);

  let mut tokens = Vec::new();
  for line in reader.lines() {
    let line = line.context("Failed to read line from .netrc")?;
    tokens.extend(line.split_whitespace().map(str::to_string));
  }

  let mut current_machine: Option<String> = None;
  let mut username: Option<String> = None;
  let mut password: Option<String> = None;

  let mut iter = tokens.into_iter();
  while let Some(token) = iter.next() {
    match token.as_str() {
      "machine" => {
        if current_machine.as_deref() == Some(target_machine) {
          break;
        }
        current_machine = iter.next();
        username = None;
        password = None;
      }
      "login" => username = iter.next(),
      "password" => password = iter.next(),
      _ => {}
    }
  }

  if current_machine.as_deref() != Some(target_machine) {
    return Ok(None);
  }

  match (username, password) {
    (Some(username), Some(password)) => Ok(Some(Credentials { username, password })),
    _ => Ok(None),
  }
}

/// Writes or updates a `.netrc` entry for the given machine.
///
/// An existing entry for the machine is replaced; otherwise a new entry is
/// appended. On Unix the file mode is set to `600`.
///
/// # Errors
///
/// Returns an error if the file cannot be read from or written to, or if
/// permissions cannot be set.
pub fn write_netrc_entry(path: &Path, machine: &str, username: &str, password: &str) -> Result<()> {
  let existing_content = if path.exists() {
    std::fs::read_to_string(path).context("Failed to read existing .netrc file")?
  } else {
    String::new()
  };

  let machine_line = format!("machine {machine}");
  let machine_exists = existing_content.lines().any(|line| is_machine_line(line, machine));

  if machine_exists {
    let mut new_content = String::new();
    let mut skip_until_next_machine = false;

    for line in existing_content.lines() {
      let trimmed = line.trim();

      if trimmed.starts_with("machine ") {
        if is_machine_line(trimmed, machine) {
          skip_until_next_machine = true;
          new_content.push_str(&format!("{machine_line}\n  login {username}\n  password {password}\n"));
        } else {
          skip_until_next_machine = false;
          new_content.push_str(line);
          new_content.push('\n');
        }
      } else if !skip_until_next_machine {
        new_content.push_str(line);
        new_content.push('\n');
      }
    }

    std::fs::write(path, new_content).context("Failed to write updated .netrc file")?;
  } else {
    let mut file = std::fs::OpenOptions::new()
      .create(true)
      .append(true)
      .open(path)
      .context("Failed to open .netrc file for writing")?;

    if !existing_content.is_empty() && !existing_content.ends_with('\n') {
      writeln!(file)?;
    }

    writeln!(file, "{machine_line}")?;
    writeln!(file, "  login {username}")?;
    writeln!(file, "  password {password}")?;
  }

  set_secure_permissions(path)
}

/// Whether `line` starts the entry for `machine`, in either entry format
fn is_machine_line(line: &str, machine: &str) -> bool {
  let mut tokens = line.split_whitespace();
  tokens.next() == Some("machine") && tokens.next() == Some(machine)
}

#[cfg(unix)]
fn set_secure_permissions(path: &Path) -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  let mut perms = std::fs::metadata(path)
    .context("Failed to read .netrc metadata")?
    .permissions();
  perms.set_mode(0o600);
  std::fs::set_permissions(path, perms).context("Failed to set .netrc permissions")
}

#[cfg(not(unix))]
fn set_secure_permissions(_path: &Path) -> Result<()> {
  Ok(())
}
