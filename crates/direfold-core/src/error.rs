//! Error types for scanning operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// An entry could not be visited for a reason other than permissions.
    #[error("walk failed at {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The root path could not be made absolute.
    #[error("can't resolve path {path}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create a walk error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Walk {
            path: path.into(),
            source,
        }
    }

    /// Path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Walk { path, .. } | Self::Resolve { path, .. } => path,
        }
    }

    /// Kind of the underlying I/O failure.
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            Self::Walk { source, .. } | Self::Resolve { source, .. } => source.kind(),
        }
    }
}

/// Non-fatal problem encountered during a scan.
///
/// The scanner only tolerates permission errors; everything else is a
/// [`ScanError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    /// Path that could not be visited.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
}

impl ScanWarning {
    /// Create a permission denied warning.
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!("Permission denied: {}", path.display()),
            path,
        }
    }
}
