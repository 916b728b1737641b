//! Scan configuration types.

use std::path::{Path, PathBuf};

use derive_builder::Builder;

/// Path prefixes of virtual filesystems that are never traversed.
pub const DEFAULT_SKIP_PREFIXES: &[&str] = &["/proc/", "/sys/", "/run/"];

/// Configuration for a scan.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root path to scan.
    pub root: PathBuf,

    /// Entries whose path starts with one of these strings are excluded
    /// together with their subtree.
    #[builder(default = "default_skip_prefixes()")]
    pub skip_prefixes: Vec<String>,

    /// Follow the root path when it is itself a symbolic link.
    ///
    /// Off by default: a link such as `/var/run -> /run` would otherwise
    /// reach a virtual filesystem under a path no skip prefix matches.
    #[builder(default = "false")]
    pub follow_root_links: bool,
}

fn default_skip_prefixes() -> Vec<String> {
    DEFAULT_SKIP_PREFIXES.iter().map(|p| p.to_string()).collect()
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a config for scanning a path with the default skip list.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skip_prefixes: default_skip_prefixes(),
            follow_root_links: false,
        }
    }

    /// Check whether a path falls under one of the skip prefixes.
    ///
    /// This is a plain string prefix test: `/proc/` matches `/proc/1` but not
    /// `/proc` itself.
    pub fn should_skip(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.skip_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
