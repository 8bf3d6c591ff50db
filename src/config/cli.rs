//! CLI argument parsing using clap

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// colstat - concurrent CSV column aggregation
#[derive(Parser, Debug)]
#[command(name = "colstat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Operation to apply to the column values (sum, avg)
    ///
    /// Passed through as a name; the registry lookup happens during run
    /// validation so an unknown operation fails before any file is opened.
    #[arg(short = 'o', long, default_value = "sum")]
    pub op: String,

    /// CSV column to aggregate (1-based)
    #[arg(short = 'c', long, default_value = "1")]
    pub col: usize,

    /// CSV files to process
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Build the run configuration from the parsed arguments
    pub fn into_config(self) -> Config {
        Config {
            files: self.files,
            operation: self.op,
            column: self.col,
        }
    }
}
