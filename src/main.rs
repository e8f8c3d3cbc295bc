mod aggregate;
mod collector;
mod config;
mod extract;
mod filename;
mod record;
mod report;

#[cfg(test)]
mod aggregate_test;
#[cfg(test)]
mod filename_test;

use clap::Parser;
use config::Config;
use std::{fs, path::PathBuf, process::exit};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Build a normalized throughput dataset from YCSB benchmark logs"
)]
struct Cli {
    /// Optional YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory containing benchmark log files
    #[arg(long)]
    results_dir: Option<PathBuf>,
    /// Directory report artifacts are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(error) => {
                error!("Failed to load config: {error}");
                exit(1);
            }
        },
        None => Config::default(),
    };

    if let Some(results_dir) = cli.results_dir {
        config.results_dir = results_dir;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    info!(
        "Analyzing benchmark results in {}",
        config.results_dir.display()
    );

    let records = match collector::collect(&config) {
        Ok(records) => records,
        Err(error) => {
            error!("Failed to collect benchmark results: {error}");
            exit(1);
        }
    };

    // nothing usable in the whole directory is a terminal condition, stop
    // before the emitter instead of producing an empty report
    if records.is_empty() {
        error!("No benchmark data found");
        return;
    }

    let dataset = aggregate::aggregate(records);

    if let Err(error) = fs::create_dir_all(&config.output_dir) {
        error!(
            "Failed to create output directory {}: {error}",
            config.output_dir.display()
        );
        exit(1);
    }

    if let Err(error) = report::emit(&dataset, &config) {
        error!("Failed to emit report: {error}");
        exit(1);
    }
}
