//! Handler for the `populate` command.

use crate::build_source;
use anyhow::Context;
use fixture_populate::{FixtureSchema, PopulateArgs, PopulateMetrics, Populator};
use std::io::Write;
use tracing::info;

/// Resolve which tables to populate, validating names against the schema.
pub fn selected_tables(schema: &FixtureSchema, requested: &[String]) -> anyhow::Result<Vec<String>> {
    if requested.is_empty() {
        return Ok(schema.table_names().into_iter().map(String::from).collect());
    }

    for name in requested {
        if schema.get_table(name).is_none() {
            anyhow::bail!(
                "Table '{name}' not found in schema (available: {})",
                schema.table_names().join(", ")
            );
        }
    }
    Ok(requested.to_vec())
}

/// Run the `populate` command.
pub fn run_populate(args: PopulateArgs) -> anyhow::Result<Vec<(String, PopulateMetrics)>> {
    let schema = FixtureSchema::from_file(&args.schema)
        .with_context(|| format!("Failed to load schema '{}'", args.schema.display()))?;
    let tables = selected_tables(&schema, &args.tables)?;

    // Command-line seed wins over the schema's seed.
    let seed = args.seed.or(schema.seed);

    if args.dry_run {
        info!(
            "Dry run: schema '{}' is valid; would generate {} rows for tables [{}]",
            args.schema.display(),
            args.row_count,
            tables.join(", ")
        );
        return Ok(Vec::new());
    }

    let populator = Populator::new(schema, build_source(seed))
        .with_format(args.output_format)
        .with_header(!args.no_header);

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory '{}'", dir.display()))?;
    }

    let mut results = Vec::with_capacity(tables.len());
    for table in tables {
        let metrics = match &args.output_dir {
            Some(dir) => {
                let path = dir.join(format!("{table}.{}", args.output_format.extension()));
                populator
                    .populate_file(&table, &path, args.row_count)
                    .with_context(|| format!("Failed to populate '{}'", path.display()))?
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                let metrics = populator
                    .populate(&table, &mut handle, args.row_count)
                    .with_context(|| format!("Failed to populate table '{table}'"))?;
                handle.flush()?;
                metrics
            }
        };
        results.push((table, metrics));
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
tables:
  - name: users
    columns:
      - name: email
        generator:
          type: email
  - name: devices
    columns:
      - name: serial
        generator:
          type: numeric
          length: 8
"#;

    #[test]
    fn test_selected_tables_defaults_to_all() {
        let schema = FixtureSchema::from_yaml(SCHEMA).unwrap();
        let tables = selected_tables(&schema, &[]).unwrap();
        assert_eq!(tables, vec!["users", "devices"]);
    }

    #[test]
    fn test_selected_tables_rejects_unknown() {
        let schema = FixtureSchema::from_yaml(SCHEMA).unwrap();
        let err = selected_tables(&schema, &["orders".to_string()]).unwrap_err();
        assert!(err.to_string().contains("orders"));
    }
}
