//! Error types for the fixture populator.

use fixture_generator::GeneratorError;
use thiserror::Error;

/// Errors that can occur while loading a schema or writing fixtures.
#[derive(Error, Debug)]
pub enum PopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema-related error.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Table not found in schema.
    #[error("Table '{0}' not found in schema")]
    TableNotFound(String),

    /// Generator error.
    #[error("Generator error in column '{column}': {source}")]
    Generator {
        column: String,
        #[source]
        source: GeneratorError,
    },
}

/// Errors raised while loading a fixture schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Table declares no columns
    #[error("Table '{0}' has no columns")]
    EmptyTable(String),

    /// Two tables share a name
    #[error("Duplicate table name: {0}")]
    DuplicateTable(String),
}
