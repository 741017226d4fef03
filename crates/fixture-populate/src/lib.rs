//! Schema-driven fixture file populator.
//!
//! This crate turns a YAML [`FixtureSchema`] into CSV or JSONL files using
//! the `fixture-generator` crate.
//!
//! # Example
//!
//! ```ignore
//! use fixture_generator::RngSource;
//! use fixture_populate::{FixtureSchema, OutputFormat, Populator};
//!
//! let schema = FixtureSchema::from_file("fixtures.yaml")?;
//! let populator = Populator::new(schema, RngSource::seeded(42))
//!     .with_format(OutputFormat::Jsonl);
//!
//! // Generate a JSONL file with 1000 rows
//! let metrics = populator.populate_file("users", "users.jsonl", 1000)?;
//! ```

pub mod args;
mod error;
mod populator;
pub mod schema;

pub use args::PopulateArgs;
pub use error::{PopulatorError, SchemaError};
pub use populator::{OutputFormat, PopulateMetrics, Populator, DEFAULT_BUFFER_SIZE};
pub use schema::{ColumnDefinition, FixtureSchema, TableDefinition};
