//! Fixture populator writing generated rows as CSV or JSONL.

use crate::error::PopulatorError;
use crate::schema::{FixtureSchema, TableDefinition};
use fixture_generator::{Generator, RandomSource, ValueKind};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for file output.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// One JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Jsonl => "jsonl",
        }
    }
}

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Populator that generates fixture rows for the tables of a schema.
pub struct Populator<S: RandomSource> {
    schema: FixtureSchema,
    generator: Generator<S>,
    format: OutputFormat,
    include_header: bool,
}

impl<S: RandomSource> Populator<S> {
    /// Create a new populator drawing from `source`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let populator = Populator::new(schema, RngSource::seeded(42));
    /// ```
    pub fn new(schema: FixtureSchema, source: S) -> Self {
        Self {
            schema,
            generator: Generator::new(source),
            format: OutputFormat::default(),
            include_header: true,
        }
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set whether to include a header row in CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &FixtureSchema {
        &self.schema
    }

    /// Get the output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Generate one row of values in column order.
    pub fn next_row(&self, table_name: &str) -> Result<Vec<String>, PopulatorError> {
        let table = self
            .schema
            .get_table(table_name)
            .ok_or_else(|| PopulatorError::TableNotFound(table_name.to_string()))?;
        self.generate_row(table)
    }

    fn generate_row(&self, table: &TableDefinition) -> Result<Vec<String>, PopulatorError> {
        table
            .columns
            .iter()
            .map(|column| {
                self.generator
                    .value(&column.generator)
                    .map_err(|source| PopulatorError::Generator {
                        column: column.name.clone(),
                        source,
                    })
            })
            .collect()
    }

    /// Generate a file with the specified number of rows.
    ///
    /// # Arguments
    ///
    /// * `table_name` - Name of the table in the schema
    /// * `output_path` - Path to the output file
    /// * `count` - Number of rows to generate
    pub fn populate_file<P: AsRef<Path>>(
        &self,
        table_name: &str,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, PopulatorError> {
        if self.schema.get_table(table_name).is_none() {
            return Err(PopulatorError::TableNotFound(table_name.to_string()));
        }

        let output_path = output_path.as_ref();
        info!(
            "Generating {} file '{}' with {} rows for table '{}'",
            self.format.extension(),
            output_path.display(),
            count,
            table_name
        );

        let file = File::create(output_path)?;
        let writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        self.populate(table_name, writer, count)
    }

    /// Write `count` generated rows for `table_name` to `writer`.
    pub fn populate<W: Write>(
        &self,
        table_name: &str,
        writer: W,
        count: u64,
    ) -> Result<PopulateMetrics, PopulatorError> {
        let start_time = Instant::now();

        let table = self
            .schema
            .get_table(table_name)
            .ok_or_else(|| PopulatorError::TableNotFound(table_name.to_string()))?;

        let mut metrics = match self.format {
            OutputFormat::Csv => self.write_csv(table, writer, count)?,
            OutputFormat::Jsonl => self.write_jsonl(table, writer, count)?,
        };
        metrics.total_duration = start_time.elapsed();

        info!(
            "Generation complete for '{}': {} rows in {:?} ({:.2} rows/sec)",
            table_name,
            metrics.rows_written,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    fn write_csv<W: Write>(
        &self,
        table: &TableDefinition,
        writer: W,
        count: u64,
    ) -> Result<PopulateMetrics, PopulatorError> {
        let mut metrics = PopulateMetrics::default();
        let mut writer = csv::Writer::from_writer(writer);

        if self.include_header {
            let write_start = Instant::now();
            writer.write_record(table.column_names())?;
            metrics.write_duration += write_start.elapsed();
        }

        for _ in 0..count {
            let gen_start = Instant::now();
            let row = self.generate_row(table)?;
            metrics.generation_duration += gen_start.elapsed();

            let write_start = Instant::now();
            writer.write_record(&row)?;
            metrics.write_duration += write_start.elapsed();

            metrics.rows_written += 1;
            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.flush()?;
        Ok(metrics)
    }

    fn write_jsonl<W: Write>(
        &self,
        table: &TableDefinition,
        mut writer: W,
        count: u64,
    ) -> Result<PopulateMetrics, PopulatorError> {
        let mut metrics = PopulateMetrics::default();

        for _ in 0..count {
            let gen_start = Instant::now();
            let row = self.generate_row(table)?;
            metrics.generation_duration += gen_start.elapsed();

            let write_start = Instant::now();
            let json = row_to_json(table, row);
            serde_json::to_writer(&mut writer, &json)?;
            writeln!(writer)?;
            metrics.write_duration += write_start.elapsed();

            metrics.rows_written += 1;
            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.flush()?;
        Ok(metrics)
    }
}

/// Convert a generated row to a JSON object, keeping column order.
///
/// Integer columns become JSON numbers; everything else stays a string.
fn row_to_json(table: &TableDefinition, row: Vec<String>) -> serde_json::Value {
    let object = table
        .columns
        .iter()
        .zip(row)
        .map(|(column, value)| {
            let json = match column.generator {
                ValueKind::Between { .. } => value
                    .parse::<i64>()
                    .map(serde_json::Value::from)
                    .unwrap_or(serde_json::Value::String(value)),
                _ => serde_json::Value::String(value),
            };
            (column.name.clone(), json)
        })
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(object)
}
