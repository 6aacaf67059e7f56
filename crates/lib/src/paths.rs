//! Path cleanup utilities.

use std::path::{Component, Path, PathBuf};

use crate::error::ConfigError;

/// Normalize a path lexically, resolving `.` and `..` components without
/// requiring the path to exist.
///
/// A `..` only cancels a preceding normal component. The root (and Windows
/// prefix) stay in place, so `/..` collapses to `/`; leading `..` on a
/// relative path is kept.
pub fn normalize_path(path: &Path) -> PathBuf {
  let mut components = Vec::new();

  for component in path.components() {
    match component {
      Component::ParentDir => match components.last() {
        Some(Component::Normal(_)) => {
          components.pop();
        }
        Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
        _ => {
          components.push(component);
        }
      },
      Component::CurDir => {}
      other => {
        components.push(other);
      }
    }
  }

  components.iter().collect()
}

/// Canonicalize a path that must name an existing directory.
///
/// Resolves symlinks and `.`/`..` components. Uses `dunce` so Windows
/// paths come back without the verbatim `\\?\` prefix.
pub fn canonical_dir(path: &Path) -> Result<PathBuf, ConfigError> {
  let canonical = dunce::canonicalize(path).map_err(|source| ConfigError::Canonicalize {
    path: path.to_path_buf(),
    source,
  })?;

  if !canonical.is_dir() {
    return Err(ConfigError::NotADirectory(canonical));
  }

  Ok(canonical)
}
