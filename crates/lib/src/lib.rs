//! docbuild-lib: Core logic for the docbuild documentation-build runner
//!
//! This crate provides the pieces the `docbuild` binary is assembled from:
//! - `BuildConfig`: immutable per-invocation configuration resolved from
//!   flags and environment variables
//! - `command`: the ordered argument vector for the appledoc generator
//! - `invoke`: subprocess execution and the post-run open step
//! - `opener`: platform default-open dispatch

pub mod command;
pub mod config;
pub mod consts;
pub mod error;
pub mod invoke;
pub mod opener;
pub mod paths;

pub use config::{BuildConfig, ConfigOverrides};
pub use error::{ConfigError, InvokeError};
pub use invoke::{InvocationResult, InvokeOptions, OpenPolicy, run_build};
