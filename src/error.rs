//! Error taxonomy
//!
//! Every failure a run can surface, from pre-flight validation through CSV
//! extraction to the final write of the result. A run produces exactly one
//! of these or a scalar, never both. There are no retries anywhere; the
//! first error aborts the run and propagates unchanged to the CLI boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout colstat
pub type Result<T> = std::result::Result<T, Error>;

/// All run-terminating failures
#[derive(Debug, Error)]
pub enum Error {
    /// The caller supplied an empty file list
    #[error("no input files")]
    NoFiles,

    /// Column indexes are 1-based; zero is rejected before any IO
    #[error("invalid column: {0}")]
    InvalidColumn(usize),

    /// Operation name not present in the registry
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A file could not be opened
    #[error("cannot open file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structurally malformed CSV (ragged records, bad quoting)
    #[error("malformed CSV in {}: {source}", path.display())]
    CsvFormat {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A targeted cell did not parse as a number
    #[error("cannot parse {value:?} as a number in {} (row {row}, column {column})", path.display())]
    NotANumber {
        path: PathBuf,
        row: usize,
        column: usize,
        value: String,
    },

    /// The row has fewer fields than the requested column index
    #[error("column {column} out of range in {} (row {row})", path.display())]
    ColumnOutOfRange {
        path: PathBuf,
        row: usize,
        column: usize,
    },

    /// The result could not be written to the output sink
    #[error("cannot write result: {0}")]
    Output(#[from] std::io::Error),
}
