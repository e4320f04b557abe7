//! colgrid CLI - derive data-grid column configuration from datasets.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Derive {
            file,
            columns,
            row_width,
            json,
        } => commands::derive::run(file, columns, row_width, json, cli.verbose),

        Commands::Filters {
            file,
            column,
            flatten,
        } => commands::filters::run(file, column, flatten, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
