use once_cell::sync::Lazy;
use regex::Regex;
use std::{fs, path::Path};
use tracing::warn;

/// Measurements pulled out of one log file.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extraction {
    pub throughput_ops_per_sec: f64,
    pub storage_size_mb: f64,
}

static RUN_THROUGHPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Run throughput\(ops/sec\):\s*([\d.e+]+)").unwrap());

static LOAD_THROUGHPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Load throughput\(ops/sec\):\s*([\d.e+]+)").unwrap());

static DATABASE_SIZE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Database size:\s*([\d.,]+)([KMG]?)").unwrap());

/// Steady-state throughput reported after the measurement phase.
/// Accepts decimal and scientific notation (`1.44026e+06`).
fn run_throughput(text: &str) -> Option<f64> {
    RUN_THROUGHPUT
        .captures(text)
        .and_then(|captures| captures[1].parse().ok())
}

/// Throughput reported by the initial load phase.
fn load_throughput(text: &str) -> Option<f64> {
    LOAD_THROUGHPUT
        .captures(text)
        .and_then(|captures| captures[1].parse().ok())
}

/// Reported on-disk size with an optional `K`/`M`/`G` suffix, normalized to
/// megabytes. A suffix-less value is raw bytes. The decimal separator may be
/// `,` depending on the locale the benchmark ran under.
fn database_size_mb(text: &str) -> Option<f64> {
    let captures = DATABASE_SIZE.captures(text)?;
    let value: f64 = captures[1].replace(',', ".").parse().ok()?;

    Some(match &captures[2] {
        "G" => value * 1024.0,
        "M" => value,
        "K" => value / 1024.0,
        _ => value / (1024.0 * 1024.0),
    })
}

/// Extract throughput and storage size from the raw text of one log file.
///
/// The run-phase throughput wins over the load-phase one; the load value is
/// only a fallback for runs that never made it past loading. Absent
/// observations stay at the zero sentinel.
pub fn extract(text: &str) -> Extraction {
    Extraction {
        throughput_ops_per_sec: run_throughput(text)
            .or_else(|| load_throughput(text))
            .unwrap_or(0.0),
        storage_size_mb: database_size_mb(text).unwrap_or(0.0),
    }
}

/// Read and extract a single log file.
///
/// Failures are absorbed here: an unreadable file is logged and treated the
/// same as a file with no measurements, so one corrupt log never aborts the
/// batch.
pub fn extract_file(path: &Path) -> Extraction {
    match fs::read_to_string(path) {
        Ok(content) => extract(&content),
        Err(error) => {
            warn!(path = ?path, "Failed to read log file: {error}");

            Extraction::default()
        }
    }
}
