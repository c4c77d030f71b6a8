//! # u-tsp CLI
//!
//! Loads a location file, builds a distance matrix and reports a short round
//! trip found by nearest neighbor + 2-opt.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::{ArgAction, Parser};
use env_logger::{Builder, Target};
use log::{debug, error, LevelFilter};
use u_tsp::distance::{DistanceMatrix, Metric};
use u_tsp::etl::{etl, DEFAULT_TARGET_DIGITS};
use u_tsp::solver::determine_path;
use u_tsp::{Error, Result};

/// Command-line interface for u-tsp
#[derive(Parser)]
#[command(name = "u-tsp")]
#[command(about = "Find a short round trip through the locations in a CSV file")]
#[command(version)]
struct Cli {
    /// Distance metric between locations (euclidean or manhattan)
    #[arg(short, long, default_value_t = Metric::Euclidean, value_parser = str::parse::<Metric>)]
    metric: Metric,

    /// CSV file with a name,x,y header
    #[arg(short, long, default_value = "data/djbouti38.csv")]
    filename: PathBuf,

    /// Report how long the solver took
    #[arg(short, long, default_value_t = true, action = ArgAction::Set)]
    time_alg: bool,

    /// Whole-number digits to scale coordinates up to
    #[arg(long, default_value_t = DEFAULT_TARGET_DIGITS)]
    target_digits: u32,

    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logger(cli.log_level) {
        eprintln!("{e}");
    }
    if let Err(e) = run(&cli) {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logger(level: LevelFilter) -> Result<()> {
    Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{} {}", record.level(), record.args()))
        .try_init()
        .map_err(|e| Error::other(format!("logger init failed: {e}")))
}

fn run(cli: &Cli) -> Result<()> {
    let metric = cli.metric;
    let (locations, scale) = etl(&cli.filename, cli.target_digits)?;
    let distances = DistanceMatrix::from_locations(&locations, metric);
    debug!(
        "{} locations, {metric} distances, symmetric: {}",
        locations.len(),
        distances.is_symmetric(1e-9)
    );

    let start = Instant::now();
    let solution = determine_path(&locations, &distances);
    let elapsed = start.elapsed();
    debug!(
        "tracked length {}, recomputed {}",
        solution.total_length(),
        solution.recompute_length(&distances)
    );

    println!("Total Path Length: {}", solution.total_length() / scale);
    println!("Path: {:?}", solution.names());
    if cli.time_alg {
        println!("Time to Run: {:.3} s", elapsed.as_secs_f64());
    }
    Ok(())
}
