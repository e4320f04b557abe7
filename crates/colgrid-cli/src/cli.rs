//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "colgrid",
    version,
    about = "Derive full data-grid column configuration from minimal descriptors"
)]
pub struct Cli {
    /// Show per-column detail
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the full table configuration for a dataset
    Derive {
        /// Data file (CSV/TSV, or a JSON array of objects)
        file: PathBuf,

        /// Column descriptor file (JSON array); inferred from the data
        /// when omitted
        #[arg(short, long)]
        columns: Option<PathBuf>,

        /// Default width for columns that set none
        #[arg(long)]
        row_width: Option<u32>,

        /// Emit the configuration summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the distinct filter options derived for one column
    Filters {
        /// Data file (CSV/TSV, or a JSON array of objects)
        file: PathBuf,

        /// Column key
        #[arg(short, long)]
        column: String,

        /// Flatten array values before deduplicating
        #[arg(long)]
        flatten: bool,
    },
}
