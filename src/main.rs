//! Command-line interface for fixture-synth
//!
//! # Usage Examples
//!
//! ## Single values
//! ```bash
//! # Five mobile numbers, reproducible
//! fixture-synth value mobile-number --count 5 --seed 7
//!
//! # An integer in [18, 80]
//! fixture-synth value between --from 18 --to 80
//!
//! # A date in 2024 formatted as day/month/year
//! fixture-synth value date --start 2024-01-01 --end 2025-01-01 --format "%d/%m/%Y"
//! ```
//!
//! ## Schema-driven files
//! ```bash
//! fixture-synth populate \
//!   --schema fixtures.yaml \
//!   --row-count 10000 \
//!   --output-format jsonl \
//!   --output-dir ./fixtures
//! ```
//!
//! Set `RUST_LOG=debug` for progress logging.

use clap::{Parser, Subcommand};
use fixture_populate::PopulateArgs;
use fixture_synth::populate::run_populate;
use fixture_synth::{generate_values, ValueArgs};
use tracing::info;

#[derive(Parser)]
#[command(name = "fixture-synth")]
#[command(about = "Generate random fixture values and test data files")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more values of a single kind
    Value(ValueArgs),

    /// Generate CSV or JSONL files from a fixture schema
    Populate(PopulateArgs),
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Value(args) => {
            let values = generate_values(&args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&values)?);
            } else {
                for value in values {
                    println!("{value}");
                }
            }
        }
        Commands::Populate(args) => {
            let results = run_populate(args)?;
            for (table, metrics) in results {
                info!(
                    "Table '{}': {} rows ({:.2} rows/sec)",
                    table,
                    metrics.rows_written,
                    metrics.rows_per_second()
                );
            }
        }
    }

    Ok(())
}
