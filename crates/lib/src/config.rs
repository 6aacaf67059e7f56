//! Build configuration resolution.
//!
//! `BuildConfig` is constructed once per invocation from CLI overrides and
//! environment variables, validated, and immutable thereafter. Resolution
//! failures halt the run before any subprocess is spawned.

use std::env;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::consts;
use crate::error::ConfigError;
use crate::paths::{canonical_dir, normalize_path};

/// Optional overrides from the command line. Unset fields fall back to the
/// environment, then to the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
  pub source_root: Option<PathBuf>,
  pub dest_dir: Option<PathBuf>,
  pub source_subdir: Option<String>,
  pub generator: Option<PathBuf>,
  pub project_name: Option<String>,
  pub project_version: Option<String>,
  pub company_name: Option<String>,
}

/// Fully-resolved configuration for one generator invocation.
#[derive(Debug, Clone, Serialize)]
pub struct BuildConfig {
  /// Canonical source root. The generator runs with this as its working
  /// directory.
  pub source_root: PathBuf,

  /// Canonical destination directory. The HTML tree lands under
  /// `<dest_dir>/html/`.
  pub dest_dir: PathBuf,

  /// Derived input path: `<source_root>/<subdir>`, lexically normalized.
  pub source_path: PathBuf,

  /// Path of the generator executable.
  pub generator: PathBuf,

  pub project_name: String,
  pub project_version: String,
  pub company_name: String,
}

impl BuildConfig {
  /// Resolve the configuration from overrides and the environment.
  ///
  /// `source_root` and `dest_dir` must name existing directories; both are
  /// canonicalized before being embedded into the argument vector so the
  /// generator never sees `.`/`..` components or symlink indirection.
  pub fn resolve(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
    let source_root = overrides
      .source_root
      .clone()
      .or_else(|| first_env(&consts::SOURCE_ROOT_ENVS))
      .ok_or(ConfigError::MissingSourceRoot)?;
    let dest_dir = overrides
      .dest_dir
      .clone()
      .or_else(|| first_env(&consts::DEST_DIR_ENVS))
      .ok_or(ConfigError::MissingDestDir)?;

    let source_root = canonical_dir(&source_root)?;
    let dest_dir = canonical_dir(&dest_dir)?;

    let subdir = overrides
      .source_subdir
      .clone()
      .unwrap_or_else(|| consts::DEFAULT_SOURCE_SUBDIR.to_string());
    let source_path = normalize_path(&source_root.join(subdir));

    let generator = overrides
      .generator
      .clone()
      .or_else(|| first_env(&[consts::GENERATOR_ENV]))
      .unwrap_or_else(|| PathBuf::from(consts::DEFAULT_GENERATOR));

    let config = BuildConfig {
      source_root,
      dest_dir,
      source_path,
      generator,
      project_name: overrides
        .project_name
        .clone()
        .unwrap_or_else(|| consts::DEFAULT_PROJECT_NAME.to_string()),
      project_version: overrides
        .project_version
        .clone()
        .unwrap_or_else(|| consts::DEFAULT_PROJECT_VERSION.to_string()),
      company_name: overrides
        .company_name
        .clone()
        .unwrap_or_else(|| consts::DEFAULT_COMPANY_NAME.to_string()),
    };

    debug!(
      source_root = %config.source_root.display(),
      dest_dir = %config.dest_dir.display(),
      generator = %config.generator.display(),
      "configuration resolved"
    );

    Ok(config)
  }

  /// Path of the generated HTML entry point.
  pub fn html_index(&self) -> PathBuf {
    self.dest_dir.join(consts::HTML_INDEX)
  }
}

/// Return the value of the first set, non-empty variable in `names`.
fn first_env(names: &[&str]) -> Option<PathBuf> {
  names
    .iter()
    .find_map(|name| env::var(name).ok().filter(|v| !v.is_empty()))
    .map(PathBuf::from)
}
