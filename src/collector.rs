use crate::{
    config::{Config, ConfigError},
    extract, filename,
    record::BenchmarkRecord,
};
use ignore::{DirEntry, WalkBuilder};
use itertools::Itertools;
use rayon::prelude::*;
use std::{ffi::OsStr, path::PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Result directory not found: {0}")]
    MissingResultDir(PathBuf),
    #[error("Invalid collector configuration")]
    Config(#[from] ConfigError),
}

/// Walk the result directory and turn every decodable log file into a
/// [`BenchmarkRecord`].
///
/// Files whose name doesn't follow the naming convention are skipped, files
/// without a positive throughput are dropped before aggregation. Extraction
/// is fanned out over the rayon thread pool; files are independent and the
/// downstream reduction doesn't depend on ordering.
pub fn collect(config: &Config) -> Result<Vec<BenchmarkRecord>, CollectError> {
    if !config.results_dir.is_dir() {
        return Err(CollectError::MissingResultDir(config.results_dir.clone()));
    }

    let glob = config.compile_glob()?;

    // snapshot the directory before reading any file
    let candidates = WalkBuilder::new(&config.results_dir)
        .max_depth(Some(1))
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                warn!("Failed to walk result directory: {error}");
                None
            }
        })
        .filter(|entry| entry.file_type().map_or(false, |file_type| file_type.is_file()))
        .map(DirEntry::into_path)
        .collect_vec();

    let mut decoded = Vec::new();
    let mut skipped = 0usize;

    for path in candidates {
        let name = match path.file_name().and_then(OsStr::to_str) {
            Some(name) => name,
            None => continue,
        };

        if !glob.is_match(name) {
            continue;
        }

        match filename::decode(name) {
            Some(parsed) => decoded.push((path, parsed)),
            None => {
                debug!(path = ?path, "File name does not follow the log naming convention");
                skipped += 1;
            }
        }
    }

    let records: Vec<BenchmarkRecord> = decoded
        .into_par_iter()
        .map(|(path, name)| {
            let extraction = extract::extract_file(&path);

            BenchmarkRecord::new(
                name.database,
                name.workload,
                name.phase,
                extraction.throughput_ops_per_sec,
                extraction.storage_size_mb,
            )
        })
        .collect();

    let (usable, empty): (Vec<_>, Vec<_>) = records
        .into_iter()
        .partition(|record| record.throughput_ops_per_sec > 0.0);

    info!(
        "Collected {} usable records ({skipped} files skipped, {} without throughput)",
        usable.len(),
        empty.len()
    );

    Ok(usable)
}
