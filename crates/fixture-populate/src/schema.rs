//! Fixture schema: named tables of generated columns, loaded from YAML.

use crate::error::SchemaError;
use fixture_generator::ValueKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

fn default_version() -> u32 {
    1
}

/// A column and the generator that fills it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Column name
    pub name: String,

    /// Generator producing this column's values
    pub generator: ValueKind,
}

/// A table of generated columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Table name (also the output file stem)
    pub name: String,

    /// Columns in output order
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Full fixture schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Default seed, used when none is given on the command line
    #[serde(default)]
    pub seed: Option<u64>,

    /// Table definitions
    pub tables: Vec<TableDefinition>,

    /// Cached table lookup (not serialized)
    #[serde(skip)]
    table_map: HashMap<String, usize>,
}

impl FixtureSchema {
    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: FixtureSchema = serde_yaml::from_str(yaml)?;
        schema.build_table_map()?;
        Ok(schema)
    }

    /// Build the internal table lookup map, rejecting empty and duplicate tables.
    fn build_table_map(&mut self) -> Result<(), SchemaError> {
        self.table_map.clear();
        for (idx, table) in self.tables.iter().enumerate() {
            if table.columns.is_empty() {
                return Err(SchemaError::EmptyTable(table.name.clone()));
            }
            if self.table_map.insert(table.name.clone(), idx).is_some() {
                return Err(SchemaError::DuplicateTable(table.name.clone()));
            }
        }
        Ok(())
    }

    /// Get a table by name.
    pub fn get_table(&self, name: &str) -> Option<&TableDefinition> {
        self.table_map.get(name).map(|&idx| &self.tables[idx])
    }

    /// Get all table names in the schema.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
version: 1
seed: 42
tables:
  - name: users
    columns:
      - name: email
        generator:
          type: email
      - name: age
        generator:
          type: between
          from: 18
          to: 80
  - name: devices
    columns:
      - name: serial
        generator:
          type: alpha_numeric
          length: 12
"#;

    #[test]
    fn test_parse_schema() {
        let schema = FixtureSchema::from_yaml(SCHEMA).unwrap();

        assert_eq!(schema.version, 1);
        assert_eq!(schema.seed, Some(42));
        assert_eq!(schema.table_names(), vec!["users", "devices"]);

        let users = schema.get_table("users").unwrap();
        assert_eq!(users.column_names(), vec!["email", "age"]);
        assert_eq!(
            users.columns[1].generator,
            ValueKind::Between { from: 18, to: 80 }
        );
    }

    #[test]
    fn test_defaults() {
        let schema = FixtureSchema::from_yaml(
            r#"
tables:
  - name: t
    columns:
      - name: c
        generator:
          type: website
"#,
        )
        .unwrap();

        assert_eq!(schema.version, 1);
        assert_eq!(schema.seed, None);
    }

    #[test]
    fn test_table_not_found() {
        let schema = FixtureSchema::from_yaml(SCHEMA).unwrap();
        assert!(schema.get_table("missing").is_none());
    }

    #[test]
    fn test_empty_table_rejected() {
        let result = FixtureSchema::from_yaml(
            r#"
tables:
  - name: empty
    columns: []
"#,
        );
        assert!(matches!(result, Err(SchemaError::EmptyTable(name)) if name == "empty"));
    }

    #[test]
    fn test_duplicate_table_rejected() {
        let result = FixtureSchema::from_yaml(
            r#"
tables:
  - name: t
    columns:
      - name: a
        generator:
          type: email
  - name: t
    columns:
      - name: b
        generator:
          type: email
"#,
        );
        assert!(matches!(result, Err(SchemaError::DuplicateTable(name)) if name == "t"));
    }

    #[test]
    fn test_unknown_generator_rejected() {
        let result = FixtureSchema::from_yaml(
            r#"
tables:
  - name: t
    columns:
      - name: a
        generator:
          type: credit_card
"#,
        );
        assert!(matches!(result, Err(SchemaError::YamlError(_))));
    }
}
