//! Root path resolution.

use std::path::{Component, Path, PathBuf};

use crate::error::ScanError;

/// Make `path` absolute against the working directory and clean it.
///
/// An empty path resolves to the working directory.
pub fn resolve_root(path: impl AsRef<Path>) -> Result<PathBuf, ScanError> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(clean_path(path));
    }

    let cwd = std::env::current_dir().map_err(|source| ScanError::Resolve {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(clean_path(&cwd.join(path)))
}

/// Lexically normalize a path.
///
/// Drops `.` segments and redundant separators and folds `..` into the
/// preceding segment. Symlinks are not consulted. `..` directly under the
/// root stays at the root; leading `..` of a relative path is kept.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
