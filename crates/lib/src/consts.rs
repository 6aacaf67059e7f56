//! Fixed values shared across the crate.

/// Application name, used in diagnostics.
pub const APP_NAME: &str = "docbuild";

/// Default path of the appledoc executable.
pub const DEFAULT_GENERATOR: &str = "/usr/local/bin/appledoc";

/// Environment variable naming the generator executable.
pub const GENERATOR_ENV: &str = "APPLEDOC";

/// Environment variables naming the source root, in precedence order.
/// The build scripts that preceded this tool used both spellings.
pub const SOURCE_ROOT_ENVS: [&str; 2] = ["JPSOURCE_ROOT", "SRCROOT"];

/// Environment variables naming the destination directory, in precedence order.
pub const DEST_DIR_ENVS: [&str; 2] = ["DERIVED_FILE_DIR", "DERIVED_FILES_DIR"];

/// Subdirectory of the source root the generator is pointed at.
pub const DEFAULT_SOURCE_SUBDIR: &str = "json/ObjC";

/// Entry point of the generated HTML tree, relative to the destination directory.
pub const HTML_INDEX: &str = "html/index.html";

/// Default project metadata passed to the generator.
pub const DEFAULT_PROJECT_NAME: &str = "JPJson";
pub const DEFAULT_PROJECT_VERSION: &str = "0.1";
pub const DEFAULT_COMPANY_NAME: &str = "|–|";
