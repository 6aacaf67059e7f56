//! Argument-vector assembly for the generator invocation.
//!
//! The command line is always built as a list of discrete arguments handed
//! to the process launcher, never as a shell-interpolated string, so paths
//! containing spaces or quotes cannot change its meaning. A separate
//! renderer quotes arguments for display only.

use std::ffi::OsString;

use crate::config::BuildConfig;

/// Source-file exclusion patterns.
pub const EXCLUDE_FLAGS: [&str; 4] = ["-x", ".m", "--ignore", ".m"];

/// Output-artifact selection.
pub const OUTPUT_FLAGS: [&str; 3] = ["--no-create-docset", "--keep-intermediate-files", "--create-html"];

/// Warning toggles.
pub const WARNING_FLAGS: [&str; 6] = [
  "--warn-undocumented-object",
  "--warn-undocumented-member",
  "--warn-empty-description",
  "--warn-unknown-directive",
  "--warn-invalid-crossref",
  "--warn-missing-arg",
];

/// Behavior toggles.
pub const BEHAVIOR_FLAGS: [&str; 6] = [
  "--no-repeat-first-par",
  "--no-keep-undocumented-objects",
  "--no-keep-undocumented-members",
  "--prefix-merged-sections",
  "--no-search-undocumented-doc",
  "--explicit-crossref",
];

/// Assemble the full argument vector for one generator run.
///
/// Order is stable: project metadata, output directory, exclusions, output
/// flags, warning flags, behavior flags, log format, exit threshold, and
/// the positional source path last.
pub fn generator_args(config: &BuildConfig) -> Vec<OsString> {
  let mut args: Vec<OsString> = Vec::new();

  args.push("-p".into());
  args.push(config.project_name.clone().into());
  args.push("-v".into());
  args.push(config.project_version.clone().into());
  args.push("-c".into());
  args.push(config.company_name.clone().into());
  args.push("-o".into());
  args.push(config.dest_dir.clone().into_os_string());

  args.extend(EXCLUDE_FLAGS.iter().map(OsString::from));
  args.extend(OUTPUT_FLAGS.iter().map(OsString::from));
  args.extend(WARNING_FLAGS.iter().map(OsString::from));
  args.extend(BEHAVIOR_FLAGS.iter().map(OsString::from));

  args.push("--logformat".into());
  args.push("xcode".into());
  args.push("--exit-threshold".into());
  args.push("2".into());

  args.push(config.source_path.clone().into_os_string());

  args
}

/// Render a program and argument vector as a single human-readable line.
///
/// Arguments containing whitespace or quotes are double-quoted. The result
/// is for diagnostics only and is never executed.
pub fn render_command(program: &std::path::Path, args: &[OsString]) -> String {
  let mut parts = vec![quote(&program.to_string_lossy())];
  parts.extend(args.iter().map(|a| quote(&a.to_string_lossy())));
  parts.join(" ")
}

fn quote(arg: &str) -> String {
  if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'') {
    format!("\"{}\"", arg.replace('"', "\\\""))
  } else {
    arg.to_string()
  }
}
