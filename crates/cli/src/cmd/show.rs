//! Implementation of the `docbuild show` command.
//!
//! Resolves the configuration and prints the generator command that `build`
//! would run, without spawning anything.

use anyhow::{Context, Result};
use serde::Serialize;

use docbuild_lib::command::{generator_args, render_command};
use docbuild_lib::{BuildConfig, ConfigOverrides};

use crate::output::{OutputFormat, print_json, print_stat};

#[derive(Serialize)]
struct ShowOutput<'a> {
  config: &'a BuildConfig,
  args: Vec<String>,
  command: String,
}

pub fn cmd_show(overrides: &ConfigOverrides, format: OutputFormat) -> Result<()> {
  let config = BuildConfig::resolve(overrides).context("Failed to resolve build configuration")?;

  let args = generator_args(&config);
  let command = render_command(&config.generator, &args);

  if format.is_json() {
    let output = ShowOutput {
      config: &config,
      args: args.iter().map(|a| a.to_string_lossy().into_owned()).collect(),
      command,
    };
    return print_json(&output);
  }

  println!("{}", command);
  println!();
  print_stat("Source root", &config.source_root.display().to_string());
  print_stat("Source path", &config.source_path.display().to_string());
  print_stat("Destination", &config.dest_dir.display().to_string());
  print_stat("Index", &config.html_index().display().to_string());

  Ok(())
}
