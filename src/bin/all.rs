//! Command-line entry point.
//!
//! Usage:
//!   seq-algo                      # Run the fixed-input demonstration
//!   seq-algo list                 # List available algorithms
//!   seq-algo verify               # Check every variant against its reference
//!   seq-algo bench [ALGORITHM]    # Benchmark all (or one) algorithm

use clap::{Parser, Subcommand};
use sequence_algo::error::{AlgoError, Result};
use sequence_algo::registry::{build_registry, AlgorithmRunner};
use sequence_algo::utils::runner;
use sequence_algo::utils::timer::{PinStrategy, TimingConfig};
use sequence_algo::{demo, tui};

#[derive(Parser)]
#[command(name = "seq-algo", about = "Sequence algorithms: demo, verification and benchmarks", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run each algorithm once on fixed inputs and print the results
    Demo,
    /// List available algorithms and their variants
    List,
    /// Verify every variant against the original implementation
    Verify,
    /// Benchmark the variants of every algorithm (or only ALGORITHM)
    Bench {
        algorithm: Option<String>,
        /// Comma-separated input sizes
        #[arg(long, value_delimiter = ',', default_values_t = [64usize, 256, 1024, 4096, 16384])]
        sizes: Vec<usize>,
        /// Number of measurement runs per variant
        #[arg(long, short = 'r', default_value_t = 30)]
        runs: usize,
        /// Warmup calls per variant before measuring
        #[arg(long, default_value_t = 10)]
        warmup: usize,
        /// Random seed for the execution order (default: time-based)
        #[arg(long)]
        seed: Option<u64>,
        /// Export raw timings to a CSV file
        #[arg(long)]
        csv: Option<String>,
        /// Trim the fastest and slowest 1% of runs
        #[arg(long, short = 'f')]
        filter: bool,
        /// Do not pin the thread to a CPU core
        #[arg(long)]
        no_pin: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command.unwrap_or(Command::Demo)) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let registry = build_registry();

    match command {
        Command::Demo => demo::run_demo(),
        Command::List => {
            tui::print_available_algorithms(&registry);
            Ok(())
        }
        Command::Verify => tui::run_verification(&registry),
        Command::Bench {
            algorithm,
            sizes,
            runs,
            warmup,
            seed,
            csv,
            filter,
            no_pin,
        } => {
            let algorithms: Vec<&dyn AlgorithmRunner> = match algorithm {
                Some(name) => match registry.find(&name) {
                    Some(algo) => vec![algo],
                    None => {
                        return Err(AlgoError::UnknownAlgorithm {
                            name,
                            available: registry.list_names().join(", "),
                        })
                    }
                },
                None => registry.all().iter().map(|a| a.as_ref()).collect(),
            };

            let config = TimingConfig {
                runs_per_variant: runs,
                warmup_iterations: warmup,
                pin_strategy: if no_pin {
                    PinStrategy::Off
                } else {
                    PinStrategy::PerExecution
                },
                filter_outliers: filter,
                seed,
            };

            tui::print_header();
            let report = runner::run_benchmarks(&algorithms, &sizes, &config);

            if let Some(path) = csv.as_deref() {
                match runner::export_csv(path, &report.raw_data) {
                    Ok(()) => println!("  Raw data exported to: {}", path),
                    Err(e) => eprintln!("  Warning: failed to export CSV: {}", e),
                }
                println!();
            }

            tui::print_report(&algorithms, &sizes, &report, filter);
            println!("Note: Speedup is relative to the 'original' variant.");
            Ok(())
        }
    }
}
