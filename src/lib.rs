//! colstat - concurrent CSV column aggregation
//!
//! colstat computes a single aggregate statistic (sum or average) over one
//! numeric column across many CSV files, processing the files in parallel
//! and merging the partial results into one scalar.
//!
//! # Architecture
//!
//! - **Column extractor**: turns one CSV stream into the column's `f64` values
//! - **Aggregation registry**: named, order-independent statistics functions
//! - **Coordinator**: worker thread per file, fan-in over channels with
//!   first-error-wins short-circuit
//! - **Validation**: every configuration check runs before any file is opened

pub mod config;
pub mod coordinator;
pub mod error;
pub mod extract;
pub mod stats;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
