//! Configuration validation
//!
//! Every pre-flight check runs here, before the coordinator spawns a single
//! thread or opens a single file. Validation failures never involve task
//! coordination.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::stats::{self, StatsFn};

/// Validate a run configuration and resolve the operation name.
///
/// Returns the resolved aggregation function so the lookup happens exactly
/// once per run. Checks, in order: non-empty file list, 1-based column
/// index, known operation name.
pub fn validate(config: &Config) -> Result<StatsFn> {
    if config.files.is_empty() {
        return Err(Error::NoFiles);
    }

    if config.column < 1 {
        return Err(Error::InvalidColumn(config.column));
    }

    stats::resolve(&config.operation)
        .ok_or_else(|| Error::InvalidOperation(config.operation.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(files: &[&str], operation: &str, column: usize) -> Config {
        Config {
            files: files.iter().map(PathBuf::from).collect(),
            operation: operation.to_string(),
            column,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(validate(&config(&["a.csv"], "sum", 1)).is_ok());
        assert!(validate(&config(&["a.csv", "b.csv"], "avg", 3)).is_ok());
    }

    #[test]
    fn test_validate_no_files() {
        let err = validate(&config(&[], "sum", 1)).unwrap_err();
        assert!(matches!(err, Error::NoFiles));
    }

    #[test]
    fn test_validate_column_zero() {
        let err = validate(&config(&["a.csv"], "sum", 0)).unwrap_err();
        assert!(matches!(err, Error::InvalidColumn(0)));
    }

    #[test]
    fn test_validate_unknown_operation() {
        let err = validate(&config(&["a.csv"], "median", 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidOperation(ref op) if op == "median"));
    }

    #[test]
    fn test_validation_order_no_files_first() {
        // An empty file list is reported even when the column is also bad.
        let err = validate(&config(&[], "sum", 0)).unwrap_err();
        assert!(matches!(err, Error::NoFiles));
    }
}
