//! Core types for direfold.
//!
//! This crate holds the pieces shared by the scanner and the command-line
//! front end: scan configuration, the running counters, the finished report,
//! and the error types.

mod config;
mod error;
mod path;
mod report;

pub use config::{DEFAULT_SKIP_PREFIXES, ScanConfig, ScanConfigBuilder};
pub use error::{ScanError, ScanWarning};
pub use path::{clean_path, resolve_root};
pub use report::{ScanReport, ScanResult};
