//! fixture-synth library
//!
//! Command handlers and argument types behind the `fixture-synth` binary.
//!
//! # CLI Usage
//!
//! ```bash
//! # Ten reproducible email addresses
//! fixture-synth value email --count 10 --seed 42
//!
//! # A 16-character alphanumeric token
//! fixture-synth value alpha-numeric --length 16
//!
//! # CSV files for every table of a schema
//! fixture-synth populate --schema fixtures.yaml --row-count 1000 --output-dir out/
//! ```

use anyhow::{bail, Context};
use clap::{Args, ValueEnum};
use fixture_generator::{
    Generator, RandomSource, RngSource, ThreadRandom, ValueKind, MIN_SUPPORTED,
};

pub mod populate;

/// Build the random source for a run: seeded when a seed is given.
pub fn build_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            tracing::debug!("Using seeded random source (seed {seed})");
            Box::new(RngSource::seeded(seed))
        }
        None => Box::new(ThreadRandom),
    }
}

/// Value generators selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ValueKindArg {
    Between,
    String,
    Numeric,
    Alpha,
    AlphaNumeric,
    Merge,
    Email,
    MobileNumber,
    Website,
    Date,
}

/// Arguments of the `value` command.
#[derive(Args, Clone, Debug)]
pub struct ValueArgs {
    /// Kind of value to generate
    #[arg(value_enum)]
    pub kind: ValueKindArg,

    /// Length for string kinds
    #[arg(long, default_value = "10")]
    pub length: usize,

    /// Lower bound: integer for `between`, character code for `string` (default 33)
    #[arg(long, allow_negative_numbers = true)]
    pub from: Option<i64>,

    /// Upper bound: integer for `between` (required), character code for `string` (default 126)
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<i64>,

    /// First input of `merge`
    #[arg(long, default_value = "")]
    pub left: String,

    /// Second input of `merge`
    #[arg(long, default_value = "")]
    pub right: String,

    /// Start of the `date` range (RFC 3339 or YYYY-MM-DD; default Unix epoch)
    #[arg(long)]
    pub start: Option<String>,

    /// End of the `date` range (RFC 3339 or YYYY-MM-DD; default now)
    #[arg(long)]
    pub end: Option<String>,

    /// strftime pattern for `date` (default RFC 3339 with milliseconds)
    #[arg(long)]
    pub format: Option<String>,

    /// Number of values to generate
    #[arg(long, short = 'n', default_value = "1")]
    pub count: u64,

    /// Random seed for deterministic generation (same seed = same values)
    #[arg(long, env = "FIXTURE_SEED")]
    pub seed: Option<u64>,

    /// Print a JSON array instead of one value per line
    #[arg(long)]
    pub json: bool,
}

fn char_code(value: Option<i64>, default: u32, flag: &str) -> anyhow::Result<u32> {
    match value {
        Some(v) => u32::try_from(v).with_context(|| format!("--{flag} must be a character code")),
        None => Ok(default),
    }
}

impl ValueArgs {
    /// Translate command-line flags into a generator configuration.
    pub fn value_kind(&self) -> anyhow::Result<ValueKind> {
        let kind = match self.kind {
            ValueKindArg::Between => {
                let Some(to) = self.to else {
                    bail!("--to is required for `between`");
                };
                ValueKind::Between {
                    from: self.from.unwrap_or(MIN_SUPPORTED),
                    to,
                }
            }
            ValueKindArg::String => ValueKind::String {
                length: self.length,
                from: char_code(self.from, 33, "from")?,
                to: char_code(self.to, 126, "to")?,
            },
            ValueKindArg::Numeric => ValueKind::Numeric {
                length: self.length,
            },
            ValueKindArg::Alpha => ValueKind::Alpha {
                length: self.length,
            },
            ValueKindArg::AlphaNumeric => ValueKind::AlphaNumeric {
                length: self.length,
            },
            ValueKindArg::Merge => ValueKind::Merge {
                a: self.left.clone(),
                b: self.right.clone(),
            },
            ValueKindArg::Email => ValueKind::Email,
            ValueKindArg::MobileNumber => ValueKind::MobileNumber,
            ValueKindArg::Website => ValueKind::Website,
            ValueKindArg::Date => ValueKind::FormattedDate {
                start: self.start.clone(),
                end: self.end.clone(),
                format: self.format.clone(),
            },
        };
        Ok(kind)
    }
}

/// Generate the values requested by `args`.
pub fn generate_values(args: &ValueArgs) -> anyhow::Result<Vec<String>> {
    let kind = args.value_kind()?;
    let generator = Generator::new(build_source(args.seed));

    (0..args.count)
        .map(|i| {
            generator
                .value(&kind)
                .with_context(|| format!("Failed to generate value {} of {}", i + 1, args.count))
        })
        .collect()
}
