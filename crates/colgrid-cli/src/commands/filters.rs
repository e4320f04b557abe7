//! Filters command - show the distinct filter options for one column.

use std::path::PathBuf;

use colored::Colorize;

use colgrid::{CellContent, FilterValue, FilterValueCollector, Loader, CARDINALITY_CUTOFF};

pub fn run(
    file: PathBuf,
    column: String,
    flatten: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let loader = Loader::new();
    let rows = loader.load_file(&file)?;

    if verbose {
        println!("Loaded {} rows from {}", rows.len(), file.display());
    }

    let collector = FilterValueCollector::new();
    let options = collector.distinct_values(&rows, &column, flatten);

    match options {
        None => {
            println!(
                "{} column '{}' has {} or more distinct values; a free-text search \
                 control would be used instead of a menu",
                "High cardinality:".yellow().bold(),
                column,
                CARDINALITY_CUTOFF
            );
        }
        Some(options) => {
            println!(
                "{} distinct value(s) for column '{}'",
                options.len().to_string().white().bold(),
                column.cyan()
            );
            for option in &options {
                let label = match &option.label {
                    CellContent::Text { text } => text.clone(),
                    CellContent::Placeholder { text } => format!("({text})"),
                    other => format!("{other:?}"),
                };
                match &option.value {
                    FilterValue::Empty => {
                        println!("  {}  {}", label.dimmed(), "[empty sentinel]".dimmed())
                    }
                    _ => println!("  {label}"),
                }
            }
        }
    }

    Ok(())
}
