//! Column extraction
//!
//! Turns one CSV stream plus a 1-based column index into the sequence of
//! `f64` values found in that column, one per row. Every row is data: header
//! rows are not skipped, so a file with a title line fails numeric parsing
//! on row 1.
//!
//! Opening the source is the caller's responsibility; this module only
//! consumes an already-open reader. The path is carried for error context.

use crate::error::{Error, Result};
use std::io::Read;
use std::path::Path;

/// Read the values of one column from a CSV stream.
///
/// The whole column is materialized before returning; downstream aggregation
/// needs the full sequence anyway. Fails on the first structurally malformed
/// record, non-numeric cell, or row shorter than `column`.
pub fn read_column<R: Read>(input: R, path: &Path, column: usize) -> Result<Vec<f64>> {
    let idx = column
        .checked_sub(1)
        .ok_or(Error::InvalidColumn(column))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(input);

    let mut values = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let row = i + 1;
        let record = record.map_err(|source| Error::CsvFormat {
            path: path.to_path_buf(),
            source,
        })?;

        let field = record.get(idx).ok_or_else(|| Error::ColumnOutOfRange {
            path: path.to_path_buf(),
            row,
            column,
        })?;

        let value: f64 = field.parse().map_err(|_| Error::NotANumber {
            path: path.to_path_buf(),
            row,
            column,
            value: field.to_string(),
        })?;

        values.push(value);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(data: &str, column: usize) -> Result<Vec<f64>> {
        read_column(data.as_bytes(), Path::new("test.csv"), column)
    }

    #[test]
    fn test_single_column() {
        let values = extract("10\n20\n30\n", 1).unwrap();
        assert_eq!(values, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_picks_requested_column() {
        let values = extract("a1,1.5,x\na2,2.5,y\n", 2).unwrap();
        assert_eq!(values, vec![1.5, 2.5]);
    }

    #[test]
    fn test_numeric_literal_forms() {
        let values = extract("123.45\n-1\n2e3\n", 1).unwrap();
        assert_eq!(values, vec![123.45, -1.0, 2000.0]);
    }

    #[test]
    fn test_quoted_field() {
        let values = extract("\"123.45\",note\n", 1).unwrap();
        assert_eq!(values, vec![123.45]);
    }

    #[test]
    fn test_empty_input() {
        let values = extract("", 1).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_header_row_is_not_skipped() {
        let err = extract("Response Time\n220\n", 1).unwrap_err();
        match err {
            Error::NotANumber { row, column, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, 1);
                assert_eq!(value, "Response Time");
            }
            other => panic!("expected NotANumber, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_cell_reports_position() {
        let err = extract("1,10\n2,twenty\n", 2).unwrap_err();
        match err {
            Error::NotANumber { row, column, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, 2);
                assert_eq!(value, "twenty");
            }
            other => panic!("expected NotANumber, got {other:?}"),
        }
    }

    #[test]
    fn test_column_out_of_range() {
        let err = extract("1,2,3\n", 4).unwrap_err();
        match err {
            Error::ColumnOutOfRange { row, column, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, 4);
            }
            other => panic!("expected ColumnOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_ragged_records_are_a_format_error() {
        let err = extract("1,2,3\n4,5\n", 1).unwrap_err();
        assert!(matches!(err, Error::CsvFormat { .. }));
    }

    #[test]
    fn test_column_zero_rejected() {
        let err = extract("1\n", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidColumn(0)));
    }
}
