//! Run configuration
//!
//! A `Config` describes one aggregation run. It is built once from the CLI,
//! validated once by [`validator`], and then read-only for the lifetime of
//! the run.

pub mod cli;
pub mod validator;

use std::path::PathBuf;

/// Configuration for a single aggregation run
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV files to aggregate over, in caller-supplied order
    pub files: Vec<PathBuf>,

    /// Name of the aggregation operation ("sum", "avg")
    pub operation: String,

    /// 1-based index of the CSV column to extract
    pub column: usize,
}
