//! CLI argument definitions for the populator.

use crate::populator::OutputFormat;
use clap::Args;
use std::path::PathBuf;

/// Arguments of the `populate` command.
#[derive(Args, Clone, Debug)]
pub struct PopulateArgs {
    /// Path to schema YAML file
    #[arg(long, short = 's', env = "FIXTURE_SCHEMA")]
    pub schema: PathBuf,

    /// Number of rows to generate per table
    #[arg(long, default_value = "1000")]
    pub row_count: u64,

    /// Random seed for deterministic generation (overrides the schema's seed)
    #[arg(long, env = "FIXTURE_SEED")]
    pub seed: Option<u64>,

    /// Specific tables to populate (comma-separated, empty = all tables from schema)
    #[arg(long, value_delimiter = ',')]
    pub tables: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub output_format: OutputFormat,

    /// Output directory (one file per table); stdout when omitted
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Omit the CSV header row
    #[arg(long)]
    pub no_header: bool,

    /// Dry-run mode: validate schema and configuration without generating files
    #[arg(long)]
    pub dry_run: bool,
}
