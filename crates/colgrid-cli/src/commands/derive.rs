//! Derive command - compute the full table configuration for a dataset.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;

use colgrid::{
    infer_columns, recompute, ColumnDescriptor, FilterKind, Loader, Pagination, TableOptions,
};

pub fn run(
    file: PathBuf,
    columns: Option<PathBuf>,
    row_width: Option<u32>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let loader = Loader::new();
    let rows = loader.load_file(&file)?;

    let descriptors: Vec<ColumnDescriptor> = match columns {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => infer_columns(&rows),
    };
    let column_slots: Vec<Option<ColumnDescriptor>> =
        descriptors.into_iter().map(Some).collect();

    let mut options = TableOptions::new();
    if let Some(width) = row_width {
        options = options.with_row_width(width);
    }

    let config = recompute(&column_slots, &rows, &options)?;
    let summary = config.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows)",
        "Derived configuration for".cyan().bold(),
        file.display().to_string().white(),
        rows.len()
    );
    println!();

    for column in &summary.columns {
        let filter = match column.filter {
            FilterKind::None => "-".to_string(),
            FilterKind::Menu => match column.filter_option_count {
                Some(n) => format!("menu({n})"),
                None => "menu".to_string(),
            },
            FilterKind::Radio => "radio".to_string(),
            FilterKind::Search => "search".to_string(),
        };
        println!(
            "  {:20} {:10} {:>5}  {:12} {}",
            column.key.white().bold(),
            format!("{:?}", column.semantic_type).to_lowercase(),
            column.width,
            filter,
            if column.sortable { "sortable".blue() } else { "".normal() }
        );
        if verbose {
            for child in &column.children {
                println!(
                    "    {:18} {:10} {:>5}",
                    child.key,
                    format!("{:?}", child.semantic_type).to_lowercase(),
                    child.width
                );
            }
        }
    }

    println!();
    println!(
        "Total width: {}  Bordered: {}  Pagination: {}",
        summary.total_width.to_string().white().bold(),
        summary.bordered,
        match summary.pagination {
            Pagination::Disabled => "disabled".to_string(),
            Pagination::Config(ref cfg) => format!("{} per page", cfg.page_size),
        }
    );

    Ok(())
}
