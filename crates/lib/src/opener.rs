//! Platform default-open dispatch.
//!
//! Opens a file with whatever the desktop environment considers its default
//! handler. The opener is spawned fire-and-forget: its exit status is not
//! awaited, matching how build scripts hand a result off to a viewer.

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::debug;

use crate::error::InvokeError;

/// The platform's default-open program and leading arguments.
#[cfg(target_os = "macos")]
pub fn default_opener() -> (PathBuf, Vec<String>) {
  (PathBuf::from("/usr/bin/open"), vec![])
}

#[cfg(all(unix, not(target_os = "macos")))]
pub fn default_opener() -> (PathBuf, Vec<String>) {
  (PathBuf::from("xdg-open"), vec![])
}

#[cfg(windows)]
pub fn default_opener() -> (PathBuf, Vec<String>) {
  // `start` is a cmd.exe builtin; the empty string is its window title slot.
  (
    PathBuf::from("cmd.exe"),
    vec!["/C".to_string(), "start".to_string(), String::new()],
  )
}

/// Open `path` with the default handler, or with `opener` when given.
///
/// The child is spawned and left to run; only spawn failures are reported.
pub fn open_path(path: &Path, opener: Option<&Path>) -> Result<(), InvokeError> {
  let (program, leading) = match opener {
    Some(program) => (program.to_path_buf(), vec![]),
    None => default_opener(),
  };

  debug!(opener = %program.display(), path = %path.display(), "opening result");

  Command::new(&program)
    .args(&leading)
    .arg(path)
    .spawn()
    .map(|_| ())
    .map_err(|source| InvokeError::OpenerSpawn {
      opener: program,
      path: path.to_path_buf(),
      source,
    })
}
