//! Scan counters and the finished report.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ScanWarning;

/// Running totals for a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Number of regular files.
    pub file_count: u64,
    /// Number of directories, the root included.
    pub dir_count: u64,
    /// Sum of the apparent sizes of all regular files.
    pub total_bytes: u64,
}

impl ScanResult {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a regular file of `size` bytes.
    pub fn record_file(&mut self, size: u64) {
        self.file_count += 1;
        self.total_bytes = self.total_bytes.saturating_add(size);
    }

    /// Count a directory.
    pub fn record_dir(&mut self) {
        self.dir_count += 1;
    }
}

/// Outcome of a completed scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Root path that was scanned.
    pub root: PathBuf,

    /// Final counters.
    pub result: ScanResult,

    /// Entries skipped because they could not be read.
    pub warnings: Vec<ScanWarning>,

    /// Wall-clock duration of the traversal.
    pub scan_duration: Duration,
}

impl ScanReport {
    /// Create a new report.
    pub fn new(
        root: PathBuf,
        result: ScanResult,
        warnings: Vec<ScanWarning>,
        scan_duration: Duration,
    ) -> Self {
        Self {
            root,
            result,
            warnings,
            scan_duration,
        }
    }

    /// Total size in bytes.
    #[inline]
    pub fn total_bytes(&self) -> u64 {
        self.result.total_bytes
    }

    /// Total number of files.
    #[inline]
    pub fn file_count(&self) -> u64 {
        self.result.file_count
    }

    /// Total number of directories.
    #[inline]
    pub fn dir_count(&self) -> u64 {
        self.result.dir_count
    }

    /// Whether any entry was skipped for lack of permission.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
