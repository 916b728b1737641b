//! Depth-first directory scanner built on walkdir.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, warn};
use walkdir::WalkDir;

use direfold_core::{ScanConfig, ScanError, ScanReport, ScanResult, ScanWarning};

/// Sequential scanner that sums up a directory tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeScanner;

impl TreeScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Perform a scan of the configured root.
    ///
    /// Returns [`ScanError::Walk`] for the first entry that fails with
    /// anything other than a permission error.
    pub fn scan(&self, config: &ScanConfig) -> Result<ScanReport, ScanError> {
        let start = Instant::now();
        let root = config.root.clone();

        let mut result = ScanResult::new();
        let mut warnings = Vec::new();

        let walker = WalkDir::new(&root)
            .follow_links(false)
            .follow_root_links(config.follow_root_links)
            .into_iter()
            .filter_entry(|entry| {
                let skip = config.should_skip(entry.path());
                if skip {
                    debug!(path = %entry.path().display(), "skipping virtual filesystem");
                }
                !skip
            });

        // Directories are committed one step late: walkdir reports a denied
        // listing as the item right after the directory itself.
        let mut pending_dir: Option<PathBuf> = None;
        let mut open_dirs = DirStack::default();

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = error_path(err.path(), err.depth(), &open_dirs, &root);

                    if !is_permission_denied(&err) {
                        return Err(ScanError::io(path, into_io_error(err)));
                    }

                    if pending_dir.as_deref() == Some(path.as_path()) {
                        pending_dir = None;
                    } else if pending_dir.take().is_some() {
                        result.record_dir();
                    }

                    let warning = ScanWarning::permission_denied(path);
                    warn!("{}, skipping", warning.message);
                    warnings.push(warning);
                    continue;
                }
            };

            if pending_dir.take().is_some() {
                result.record_dir();
            }

            let file_type = entry.file_type();
            if file_type.is_dir() {
                open_dirs.enter(entry.depth(), entry.path());
                pending_dir = Some(entry.into_path());
            } else if file_type.is_file() {
                let metadata = entry
                    .metadata()
                    .map_err(|err| ScanError::io(entry.path(), into_io_error(err)))?;
                result.record_file(metadata.len());
            }
        }

        if pending_dir.is_some() {
            result.record_dir();
        }

        Ok(ScanReport::new(root, result, warnings, start.elapsed()))
    }
}

/// Directories on the path from the root to the one currently listed,
/// indexed by depth.
#[derive(Debug, Default)]
struct DirStack {
    dirs: Vec<PathBuf>,
}

impl DirStack {
    fn enter(&mut self, depth: usize, path: &Path) {
        self.dirs.truncate(depth);
        self.dirs.push(path.to_path_buf());
    }

    /// Directory whose listing produces entries at `depth`.
    fn listing(&self, depth: usize) -> Option<&Path> {
        depth
            .checked_sub(1)
            .and_then(|parent| self.dirs.get(parent))
            .map(PathBuf::as_path)
    }
}

/// Path to blame for a walk error.
///
/// walkdir leaves the path out when reading the next entry of a listing
/// fails; that error belongs to the directory being listed.
fn error_path(path: Option<&Path>, depth: usize, open_dirs: &DirStack, root: &Path) -> PathBuf {
    path.or_else(|| open_dirs.listing(depth))
        .unwrap_or(root)
        .to_path_buf()
}

/// Underlying I/O error, without walkdir's path context.
fn into_io_error(err: walkdir::Error) -> io::Error {
    err.into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop"))
}

fn is_permission_denied(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied)
}
