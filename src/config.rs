use globset::{GlobBuilder, GlobMatcher};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Log glob was invalid")]
    InvalidGlob(#[from] globset::Error),
    #[error("Failed to read config file")]
    UnreadableFile(#[from] std::io::Error),
    #[error("Failed to deserialize config file")]
    Malformed(#[from] serde_yaml::Error),
}

/// Run configuration with defaults matching the conventional layout of a
/// benchmark checkout: logs in `benchmark_results`, report artifacts in
/// `benchmark_graphs`.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // directory scanned for benchmark log files
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    // directory the report emitter writes into, created on demand
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    // glob candidate log files must match before decoding
    #[serde(default = "default_log_glob")]
    pub log_glob: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            output_dir: default_output_dir(),
            log_glob: default_log_glob(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_reader(File::open(path)?)?)
    }

    /// compile the log glob into a matcher for the collector
    pub fn compile_glob(&self) -> Result<GlobMatcher, ConfigError> {
        Ok(GlobBuilder::new(&self.log_glob)
            .build()?
            .compile_matcher())
    }
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("benchmark_results")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("benchmark_graphs")
}

fn default_log_glob() -> String {
    String::from("*_*.log")
}
