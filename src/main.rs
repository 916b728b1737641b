//! direfold - count files, folders and bytes under a directory.
//!
//! Usage:
//!   direfold [PATH]          Scan PATH (defaults to the current directory)
//!   direfold -v [PATH]       Also report how long the scan took
//!   direfold --help          Show help

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use humansize::{DECIMAL, FormatSizeOptions};
use tracing::{Level, debug, error, info};

use direfold_core::resolve_root;
use direfold_scan::{ScanConfig, ScanReport, TreeScanner};

#[derive(Parser)]
#[command(
    name = "direfold",
    version,
    about = "Count files, folders and bytes under a directory",
    long_about = "direfold walks a directory tree and prints how many files and \
                  folders it holds and how large they are. Virtual filesystems \
                  (/proc, /sys, /run) are never descended into."
)]
struct Cli {
    /// Path to scan (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Print the scan duration and debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let root = resolve_root(&cli.path).context("Invalid path")?;
    let config = ScanConfig::new(root);

    let report = match TreeScanner::new().scan(&config) {
        Ok(report) => report,
        Err(err) => {
            error!("can't walk dir: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    print!("{}", render_summary(&report));

    if cli.verbose {
        if report.has_warnings() {
            info!(
                "{} entr{} skipped: permission denied",
                report.warnings.len(),
                if report.warnings.len() == 1 { "y" } else { "ies" }
            );
            for warning in &report.warnings {
                debug!("{}", warning.message);
            }
        }
        info!("searched for {:?} :)", report.scan_duration);
    }

    Ok(ExitCode::SUCCESS)
}

/// Install the stderr log subscriber.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Build the summary block printed after a successful scan.
fn render_summary(report: &ScanReport) -> String {
    let lines = [
        String::new(),
        format!("direfold: {}", report.root.display()),
        "---".to_string(),
        format!("size:    {}", format_size(report.total_bytes())),
        format!("files:   {}", format_count(report.file_count())),
        format!("folders: {}", format_count(report.dir_count())),
        String::new(),
    ];

    lines.iter().fold(String::new(), |mut out, line| {
        out.push_str(line);
        out.push('\n');
        out
    })
}

/// Format size in human-readable SI units.
///
/// Values below 10 of their unit keep one decimal (`1.0 MB`, `9.5 kB`), larger
/// ones and plain bytes are whole numbers (`12 MB`, `30 B`).
fn format_size(bytes: u64) -> String {
    let mut scaled = bytes as f64;
    let mut scale = 0;
    while scaled >= 1000.0 {
        scaled /= 1000.0;
        scale += 1;
    }

    let places = if scale == 0 || scaled >= 9.95 { 0 } else { 1 };
    let options = FormatSizeOptions::from(DECIMAL)
        .decimal_places(places)
        .decimal_zeroes(places);

    humansize::format_size(bytes, options)
}

/// Format a count with comma thousands separators.
fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
