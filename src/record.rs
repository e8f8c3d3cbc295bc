use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Not a phase tag")]
pub struct UnknownPhase;

/// Stage of a benchmark run: the initial data-loading stage or the
/// measurement stage that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Load,
    Run,
}

impl FromStr for Phase {
    type Err = UnknownPhase;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "load" => Ok(Self::Load),
            "run" => Ok(Self::Run),
            _ => Err(UnknownPhase),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(formatter, "load"),
            Self::Run => write!(formatter, "run"),
        }
    }
}

/// One throughput observation recovered from a single log file.
///
/// A throughput of exactly zero means "unavailable" and never enters the
/// working dataset; a storage size of zero means "not reported".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub database: String,
    pub workload: String,
    pub phase: Phase,
    pub throughput_ops_per_sec: f64,
    pub throughput_millions: f64,
    /// normalized to megabytes at parse time, raw unit suffixes never persist
    pub storage_size_mb: f64,
}

impl BenchmarkRecord {
    pub fn new(
        database: String,
        workload: String,
        phase: Phase,
        throughput_ops_per_sec: f64,
        storage_size_mb: f64,
    ) -> Self {
        Self {
            database,
            workload,
            phase,
            throughput_ops_per_sec,
            throughput_millions: throughput_ops_per_sec / 1_000_000.0,
            storage_size_mb,
        }
    }

    /// aggregation key identifying one logical measurement
    pub fn key(&self) -> (String, String, Phase) {
        (self.database.clone(), self.workload.clone(), self.phase)
    }
}
