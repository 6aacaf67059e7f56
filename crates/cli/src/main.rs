//! docbuild - drives the appledoc documentation generator.
//!
//! Resolves source and destination directories from flags or the build
//! environment, assembles the generator's argument vector, runs it, and
//! opens the generated HTML index.

mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use docbuild_lib::{ConfigOverrides, OpenPolicy};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

/// docbuild - documentation build runner
#[derive(Parser)]
#[command(name = "docbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

/// Configuration flags shared by all subcommands. Unset values fall back to
/// the environment, then to built-in defaults.
#[derive(Args, Debug, Clone)]
struct ConfigArgs {
  /// Source root directory (default: $JPSOURCE_ROOT or $SRCROOT)
  #[arg(long)]
  source_root: Option<PathBuf>,

  /// Destination directory (default: $DERIVED_FILE_DIR or $DERIVED_FILES_DIR)
  #[arg(long)]
  dest_dir: Option<PathBuf>,

  /// Subdirectory of the source root to document
  #[arg(long)]
  source_subdir: Option<String>,

  /// Path of the appledoc executable (default: $APPLEDOC or /usr/local/bin/appledoc)
  #[arg(long)]
  generator: Option<PathBuf>,

  /// Project name passed to the generator
  #[arg(long)]
  project: Option<String>,

  /// Project version passed to the generator
  #[arg(long)]
  project_version: Option<String>,

  /// Company name passed to the generator
  #[arg(long)]
  company: Option<String>,
}

impl ConfigArgs {
  fn overrides(&self) -> ConfigOverrides {
    ConfigOverrides {
      source_root: self.source_root.clone(),
      dest_dir: self.dest_dir.clone(),
      source_subdir: self.source_subdir.clone(),
      generator: self.generator.clone(),
      project_name: self.project.clone(),
      project_version: self.project_version.clone(),
      company_name: self.company.clone(),
    }
  }
}

/// When to open the generated HTML index.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OpenArg {
  /// Open the index even when the generator failed
  #[default]
  Always,
  /// Open the index only after a clean generator exit
  OnSuccess,
  /// Never open the index
  Never,
}

impl From<OpenArg> for OpenPolicy {
  fn from(arg: OpenArg) -> Self {
    match arg {
      OpenArg::Always => OpenPolicy::Always,
      OpenArg::OnSuccess => OpenPolicy::OnSuccess,
      OpenArg::Never => OpenPolicy::Never,
    }
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Run the documentation generator and open the result
  Build {
    #[command(flatten)]
    config: ConfigArgs,

    /// When to open the generated index
    #[arg(long, value_enum, default_value = "always")]
    open: OpenArg,

    /// Program used to open the index (default: platform handler)
    #[arg(long)]
    opener: Option<PathBuf>,
  },

  /// Print the fully-resolved generator command without running it
  Show {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("docbuild=debug,docbuild_lib=debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt().with_env_filter(filter).without_time().init();

  match cli.command {
    Commands::Build { config, open, opener } => cmd::cmd_build(&config.overrides(), open.into(), opener),
    Commands::Show { config, format } => cmd::cmd_show(&config.overrides(), format),
  }
}
