//! Error types for docbuild-lib.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving and validating the build configuration.
///
/// All of these halt the invocation before any subprocess is spawned.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// No source root was given via flag or environment.
  #[error("source root not set: pass --source-root or set JPSOURCE_ROOT/SRCROOT")]
  MissingSourceRoot,

  /// No destination directory was given via flag or environment.
  #[error("destination directory not set: pass --dest-dir or set DERIVED_FILE_DIR/DERIVED_FILES_DIR")]
  MissingDestDir,

  /// A configured path does not name an existing directory.
  #[error("not a directory: {0}")]
  NotADirectory(PathBuf),

  /// A configured path could not be canonicalized.
  #[error("failed to resolve {path}: {source}")]
  Canonicalize {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// Errors raised while spawning subprocesses.
///
/// A generator that runs and exits nonzero is not an error here; that
/// outcome is reported through `InvocationResult`.
#[derive(Debug, Error)]
pub enum InvokeError {
  /// The generator executable could not be spawned.
  #[error("failed to run generator {generator}: {source}")]
  GeneratorSpawn {
    generator: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The file opener could not be spawned.
  #[error("failed to open {path} with {opener}: {source}")]
  OpenerSpawn {
    opener: PathBuf,
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
