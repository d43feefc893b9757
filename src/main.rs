use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use beacon_scan::logging::init_logging;
use beacon_scan::search::{ParallelConfig, run_parallel_search};
use beacon_scan::{Position, Sensor, count_excluded_at_row, find_unique_gap, parse_file};

/// Column multiplier for the tuning frequency.
const TUNING_MULTIPLIER: i64 = 4_000_000;

const DEFAULT_ROW: &str = "2000000";
const DEFAULT_RANGE_MAX: &str = "4000000";

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "beacon-scan")]
#[command(about = "beacon-scan - sensor exclusion-zone solver")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count positions on a row where no undetected beacon can be
    Count {
        /// Path to the sensor report file
        input: PathBuf,
        /// Row to scan
        #[arg(long, default_value = DEFAULT_ROW, allow_negative_numbers = true)]
        row: i64,
        /// Count cells holding a known beacon as excluded too
        #[arg(long)]
        include_beacons: bool,
    },
    /// Find the single uncovered position inside [0, range-max]
    Search {
        /// Path to the sensor report file
        input: PathBuf,
        /// Upper bound of the square search window
        #[arg(long, default_value = DEFAULT_RANGE_MAX)]
        range_max: i64,
        /// Number of worker threads (defaults to the number of CPUs)
        #[arg(long, short = 'j')]
        cores: Option<usize>,
        /// Print search statistics
        #[arg(long)]
        stats: bool,
    },
    /// Run both the row count and the gap search
    Solve {
        /// Path to the sensor report file
        input: PathBuf,
        /// Row to scan for the count
        #[arg(long, default_value = DEFAULT_ROW, allow_negative_numbers = true)]
        row: i64,
        /// Upper bound of the square search window
        #[arg(long, default_value = DEFAULT_RANGE_MAX)]
        range_max: i64,
        /// Number of worker threads (defaults to the number of CPUs)
        #[arg(long, short = 'j')]
        cores: Option<usize>,
    },
}

/// Encode a gap position as `x * 4000000 + y`.
fn tuning_frequency(position: Position) -> i64 {
    position.x * TUNING_MULTIPLIER + position.y
}

fn load_sensors(path: &Path) -> Result<Vec<Sensor>, Box<dyn std::error::Error>> {
    let sensors = parse_file(path)?;
    tracing::debug!(count = sensors.len(), path = %path.display(), "loaded sensor reports");
    Ok(sensors)
}

fn run_count(
    input: &Path,
    row: i64,
    include_beacons: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let sensors = load_sensors(input)?;
    let excluded = count_excluded_at_row(&sensors, row, !include_beacons);
    println!("{}", excluded);
    Ok(())
}

fn run_search(
    input: &Path,
    range_max: i64,
    cores: Option<usize>,
    stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let sensors = load_sensors(input)?;
    let config = ParallelConfig::default().with_workers_option(cores);
    let result = run_parallel_search(&sensors, range_max, &config)?;

    println!("Position: {}", result.position);
    println!("Tuning frequency: {}", tuning_frequency(result.position));

    if stats {
        println!("\nSearch Statistics:");
        for line in result.statistics.format_summary().lines() {
            println!("  {}", line);
        }
        for report in &result.worker_reports {
            println!(
                "  Worker {}: rows {} scanned {} ({})",
                report.worker_id, report.rows, report.rows_scanned, report.state
            );
        }
    }
    Ok(())
}

fn run_solve(
    input: &Path,
    row: i64,
    range_max: i64,
    cores: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let sensors = load_sensors(input)?;
    let workers = cores.unwrap_or_else(num_cpus::get);

    println!(
        "First star answer: {}",
        count_excluded_at_row(&sensors, row, true)
    );

    let position = find_unique_gap(&sensors, range_max, workers)?;
    println!("Second star answer: {}", tuning_frequency(position));
    Ok(())
}

// --- Main Function ---
fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Error initializing logging: {}", e);
        std::process::exit(1);
    }

    let outcome = match args.command {
        Commands::Count {
            input,
            row,
            include_beacons,
        } => run_count(&input, row, include_beacons),
        Commands::Search {
            input,
            range_max,
            cores,
            stats,
        } => run_search(&input, range_max, cores, stats),
        Commands::Solve {
            input,
            row,
            range_max,
            cores,
        } => run_solve(&input, row, range_max, cores),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
