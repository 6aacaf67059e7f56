//! Implementation of the `docbuild build` command.
//!
//! Resolves the configuration, prints the fully-resolved generator command,
//! runs the generator with the source root as its working directory, and
//! opens the HTML index according to the open policy.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use docbuild_lib::command::{generator_args, render_command};
use docbuild_lib::{BuildConfig, ConfigOverrides, InvokeOptions, OpenPolicy, run_build};

use crate::output::{format_duration, print_error, print_stat, print_success};

/// Execute the build command.
///
/// The resolved command line is always printed before execution so a failed
/// run can be reproduced by hand. The process exits with the generator's
/// own code when the generator fails; the open step still runs first, per
/// the configured policy.
pub fn cmd_build(overrides: &ConfigOverrides, open: OpenPolicy, opener: Option<PathBuf>) -> Result<()> {
  let start = Instant::now();

  let config = BuildConfig::resolve(overrides).context("Failed to resolve build configuration")?;

  let args = generator_args(&config);
  println!("{}", render_command(&config.generator, &args));
  debug!(generator = %config.generator.display(), cwd = %config.source_root.display(), "invoking generator");

  let options = InvokeOptions {
    open,
    opener,
    probe_version: true,
  };

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let result = rt
    .block_on(run_build(&config, &options))
    .context("Generator invocation failed")?;

  if result.exit_succeeded {
    print_success(&format!("Documentation generated in {}", format_duration(start.elapsed())));
    print_stat("Output", &config.html_index().display().to_string());
    info!(index = %config.html_index().display(), opened = result.opened, "build finished");
    Ok(())
  } else {
    let code = result.exit_code.unwrap_or(1);
    print_error(&format!("Generator failed with exit code {}", code));
    std::process::exit(code);
  }
}
