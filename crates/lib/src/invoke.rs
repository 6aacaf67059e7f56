//! Generator invocation.
//!
//! Runs the documentation generator as a child process with an explicit
//! working directory (the invoker's own cwd is never mutated), records its
//! exit status, and opens the generated HTML index according to the
//! configured policy.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::command::generator_args;
use crate::config::BuildConfig;
use crate::error::InvokeError;
use crate::opener::open_path;

/// When to open the generated HTML index after the generator returns.
///
/// The build scripts this tool replaces opened the index unconditionally,
/// so `Always` is the default; `OnSuccess` guards the step behind a clean
/// generator exit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenPolicy {
  #[default]
  Always,
  OnSuccess,
  Never,
}

/// Options for one invocation.
#[derive(Debug, Clone, Default)]
pub struct InvokeOptions {
  /// When to open the result.
  pub open: OpenPolicy,

  /// Opener program override. `None` uses the platform default handler.
  pub opener: Option<PathBuf>,

  /// Probe the generator with `--version` before running it.
  pub probe_version: bool,
}

/// Outcome of one generator run.
#[derive(Debug, Clone)]
pub struct InvocationResult {
  /// Whether the generator exited with status zero.
  pub exit_succeeded: bool,

  /// The generator's exit code, if it exited normally.
  pub exit_code: Option<i32>,

  /// Whether the open step was performed.
  pub opened: bool,
}

/// Run the generator and open the result.
///
/// The child runs with `current_dir` set to the source root and inherits
/// stdout/stderr so its log streams through. A nonzero generator exit is
/// reported through the result, not as an error; only spawn failures are
/// errors.
pub async fn run_build(config: &BuildConfig, options: &InvokeOptions) -> Result<InvocationResult, InvokeError> {
  if options.probe_version {
    match probe_version(config).await {
      Some(version) => info!(generator = %config.generator.display(), %version, "generator version"),
      None => debug!(generator = %config.generator.display(), "version probe failed"),
    }
  }

  let args = generator_args(config);

  debug!(cwd = %config.source_root.display(), "spawning generator");

  let status = Command::new(&config.generator)
    .args(&args)
    .current_dir(&config.source_root)
    .status()
    .await
    .map_err(|source| InvokeError::GeneratorSpawn {
      generator: config.generator.clone(),
      source,
    })?;

  let exit_succeeded = status.success();
  if exit_succeeded {
    info!(dest = %config.dest_dir.display(), "generator finished");
  } else {
    warn!(code = ?status.code(), "generator exited with failure");
  }

  let should_open = match options.open {
    OpenPolicy::Always => true,
    OpenPolicy::OnSuccess => exit_succeeded,
    OpenPolicy::Never => false,
  };

  if should_open {
    open_path(&config.html_index(), options.opener.as_deref())?;
  }

  Ok(InvocationResult {
    exit_succeeded,
    exit_code: status.code(),
    opened: should_open,
  })
}

/// Ask the generator for its version string. Failures are not fatal; the
/// probe only feeds the startup banner.
async fn probe_version(config: &BuildConfig) -> Option<String> {
  let output = Command::new(&config.generator)
    .arg("--version")
    .stdin(Stdio::null())
    .output()
    .await
    .ok()?;

  if !output.status.success() {
    return None;
  }

  let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
  if version.is_empty() { None } else { Some(version) }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
  use super::*;
  use std::os::unix::fs::PermissionsExt;
  use std::path::Path;
  use tempfile::TempDir;

  /// Write an executable shell script into `dir`.
  fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
  }

  /// A fake generator that creates a marker file in its working directory
  /// and exits with `code`. The `--version` probe is answered separately so
  /// it leaves no marker behind.
  fn fake_generator(dir: &Path, code: i32) -> PathBuf {
    write_script(
      dir,
      "fake-appledoc",
      &format!(
        "if [ \"$1\" = \"--version\" ]; then echo fake-appledoc 2.2; exit 0; fi\ntouch cwd_marker\nexit {}",
        code
      ),
    )
  }

  /// A fake opener that appends its argument to a log file.
  fn fake_opener(dir: &Path, log: &Path) -> PathBuf {
    write_script(dir, "fake-opener", &format!("echo \"$1\" >> \"{}\"", log.display()))
  }

  fn test_config(bins: &Path, src: &Path, dest: &Path) -> BuildConfig {
    BuildConfig {
      source_root: src.to_path_buf(),
      dest_dir: dest.to_path_buf(),
      source_path: src.join("json/ObjC"),
      generator: fake_generator(bins, 0),
      project_name: "JPJson".to_string(),
      project_version: "0.1".to_string(),
      company_name: "acme".to_string(),
    }
  }

  fn opener_log_lines(log: &Path) -> usize {
    match std::fs::read_to_string(log) {
      Ok(content) => content.lines().count(),
      Err(_) => 0,
    }
  }

  /// Wait for the fire-and-forget opener to finish writing its log.
  async fn settle() {
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;
  }

  #[tokio::test]
  async fn generator_runs_in_source_root() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::create_dir_all(&dest).unwrap();

    let config = test_config(temp.path(), &src, &dest);
    let options = InvokeOptions {
      open: OpenPolicy::Never,
      ..Default::default()
    };

    let result = run_build(&config, &options).await.unwrap();

    assert!(result.exit_succeeded);
    assert_eq!(result.exit_code, Some(0));
    assert!(!result.opened);
    assert!(src.join("cwd_marker").exists(), "generator should run with cwd = source root");
  }

  #[tokio::test]
  async fn failed_generator_still_opens_with_always_policy() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::create_dir_all(&dest).unwrap();
    let log = temp.path().join("opener.log");

    let mut config = test_config(temp.path(), &src, &dest);
    config.generator = fake_generator(temp.path(), 2);

    let options = InvokeOptions {
      open: OpenPolicy::Always,
      opener: Some(fake_opener(temp.path(), &log)),
      probe_version: false,
    };

    let result = run_build(&config, &options).await.unwrap();
    settle().await;

    assert!(!result.exit_succeeded);
    assert_eq!(result.exit_code, Some(2));
    assert!(result.opened);
    assert_eq!(opener_log_lines(&log), 1, "opener should be invoked exactly once");

    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.trim().ends_with("html/index.html"));
  }

  #[tokio::test]
  async fn failed_generator_skips_open_with_on_success_policy() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::create_dir_all(&dest).unwrap();
    let log = temp.path().join("opener.log");

    let mut config = test_config(temp.path(), &src, &dest);
    config.generator = fake_generator(temp.path(), 2);

    let options = InvokeOptions {
      open: OpenPolicy::OnSuccess,
      opener: Some(fake_opener(temp.path(), &log)),
      probe_version: false,
    };

    let result = run_build(&config, &options).await.unwrap();
    settle().await;

    assert!(!result.exit_succeeded);
    assert!(!result.opened);
    assert_eq!(opener_log_lines(&log), 0, "opener should not run after failure");
  }

  #[tokio::test]
  async fn successful_generator_opens_with_on_success_policy() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::create_dir_all(&dest).unwrap();
    let log = temp.path().join("opener.log");

    let config = test_config(temp.path(), &src, &dest);
    let options = InvokeOptions {
      open: OpenPolicy::OnSuccess,
      opener: Some(fake_opener(temp.path(), &log)),
      probe_version: false,
    };

    let result = run_build(&config, &options).await.unwrap();
    settle().await;

    assert!(result.exit_succeeded);
    assert!(result.opened);
    assert_eq!(opener_log_lines(&log), 1);
  }

  #[tokio::test]
  async fn missing_generator_is_spawn_error() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::create_dir_all(&dest).unwrap();

    let mut config = test_config(temp.path(), &src, &dest);
    config.generator = PathBuf::from("/definitely/not/appledoc");

    let options = InvokeOptions {
      open: OpenPolicy::Never,
      ..Default::default()
    };

    let err = run_build(&config, &options).await.unwrap_err();
    assert!(matches!(err, InvokeError::GeneratorSpawn { .. }));
  }

  #[tokio::test]
  async fn version_probe_reads_generator_version() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::create_dir_all(&dest).unwrap();

    let config = test_config(temp.path(), &src, &dest);
    let version = probe_version(&config).await;

    assert_eq!(version.as_deref(), Some("fake-appledoc 2.2"));
  }

  #[tokio::test]
  async fn version_probe_tolerates_missing_generator() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    let dest = temp.path().join("dest");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::create_dir_all(&dest).unwrap();

    let mut config = test_config(temp.path(), &src, &dest);
    config.generator = PathBuf::from("/definitely/not/appledoc");

    assert!(probe_version(&config).await.is_none());
  }
}
