use crate::{
    config::Config,
    record::{BenchmarkRecord, Phase},
};
use itertools::Itertools;
use std::fs::File;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write dataset export")]
    Export(#[from] std::io::Error),
    #[error("Failed to serialize dataset")]
    Serialize(#[from] serde_yaml::Error),
}

/// Consume the aggregated dataset: print the console summary and export the
/// rows into the output directory.
///
/// This is the presentation end of the pipeline, nothing upstream depends on
/// it. Chart image rendering deliberately lives outside this tool.
pub fn emit(dataset: &[BenchmarkRecord], config: &Config) -> Result<(), ReportError> {
    let databases = dataset
        .iter()
        .map(|record| record.database.as_str())
        .unique()
        .sorted()
        .collect_vec();
    let workloads = dataset
        .iter()
        .map(|record| record.workload.as_str())
        .unique()
        .sorted()
        .collect_vec();

    println!("Found {} benchmark results", dataset.len());
    println!("Databases tested: {}", databases.iter().join(", "));
    println!("Workloads tested: {}", workloads.iter().join(", "));

    println!("\nPerformance summary:");
    for database in &databases {
        let throughputs = dataset
            .iter()
            .filter(|record| record.database == *database)
            .map(|record| record.throughput_millions)
            .collect_vec();
        let tested = dataset
            .iter()
            .filter(|record| record.database == *database)
            .map(|record| record.workload.as_str())
            .unique()
            .count();

        let mean = throughputs.iter().sum::<f64>() / throughputs.len() as f64;
        let min = throughputs.iter().copied().fold(f64::INFINITY, f64::min);
        let max = throughputs.iter().copied().fold(0.0, f64::max);

        println!(
            "  {database}: min {min:.2}M / avg {mean:.2}M / max {max:.2}M ops/sec across {tested} workloads"
        );
    }

    // steady-state winners only, load-phase rows are not comparable here
    println!("\nTop performers:");
    for workload in &workloads {
        let top = dataset
            .iter()
            .filter(|record| record.workload == *workload && record.phase == Phase::Run)
            .max_by(|a, b| {
                a.throughput_ops_per_sec
                    .total_cmp(&b.throughput_ops_per_sec)
            });

        if let Some(top) = top {
            println!(
                "  {workload}: {} ({:.1}M ops/sec)",
                top.database, top.throughput_millions
            );
        }
    }

    let export_path = config.output_dir.join("dataset.yaml");
    serde_yaml::to_writer(File::create(&export_path)?, dataset)?;

    info!("Dataset exported to {}", export_path.display());

    Ok(())
}
