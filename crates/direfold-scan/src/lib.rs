//! Directory tree scanner for direfold.
//!
//! Walks a directory depth-first on the calling thread and sums up files,
//! directories and bytes. Paths under the configured skip prefixes are
//! pruned together with their subtrees, permission errors are recorded and
//! stepped over, and any other I/O failure ends the scan.
//!
//! # Example
//!
//! ```rust,no_run
//! use direfold_scan::{ScanConfig, TreeScanner};
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let report = TreeScanner::new().scan(&config).unwrap();
//!
//! println!("Total size: {} bytes", report.total_bytes());
//! println!("Total files: {}", report.file_count());
//! ```

mod scanner;

pub use scanner::TreeScanner;

// Re-export core types for convenience
pub use direfold_core::{ScanConfig, ScanError, ScanReport, ScanResult, ScanWarning};
