//! Concurrent pipeline coordinator
//!
//! Orchestrates one worker thread per input file and merges their results
//! into a single consolidated sequence, then applies the selected
//! aggregation function exactly once.
//!
//! # Failure semantics
//!
//! First error wins: the moment any worker reports a failure, the run
//! returns that error and stops waiting. Workers still in flight are
//! detached, not joined; their sends land in unbounded channels (or fail
//! against dropped receivers) so an abandoned worker can always run to
//! completion and exit. A run produces exactly one terminal outcome: a
//! scalar written to the sink, or an error.

use crate::config::{validator, Config};
use crate::error::{Error, Result};
use crate::extract;
use crossbeam::channel::{self, never, Receiver};
use crossbeam::select;
use log::debug;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::thread;

/// Run one aggregation: fan out over `config.files`, fan in, aggregate,
/// write the scalar and a trailing newline to `out`.
///
/// Validation runs first, so configuration errors surface before any file
/// is opened or any thread is spawned.
pub fn run(config: &Config, out: &mut dyn Write) -> Result<()> {
    let op = validator::validate(config)?;

    let (res_tx, res_rx) = channel::unbounded::<Vec<f64>>();
    let (err_tx, err_rx) = channel::unbounded::<Error>();

    debug!("spawning {} workers", config.files.len());

    let mut handles = Vec::with_capacity(config.files.len());
    for path in &config.files {
        let path = path.clone();
        let column = config.column;
        let res_tx = res_tx.clone();
        let err_tx = err_tx.clone();

        handles.push(thread::spawn(move || {
            // A send fails only after the coordinator short-circuited on
            // another worker's error; the message is dropped either way.
            match process_file(&path, column) {
                Ok(values) => {
                    debug!("{}: extracted {} values", path.display(), values.len());
                    let _ = res_tx.send(values);
                }
                Err(err) => {
                    let _ = err_tx.send(err);
                }
            }
        }));
    }

    // The workers now hold the only senders, so both lanes disconnect
    // exactly when every worker has reported and exited.
    drop(res_tx);
    drop(err_tx);

    let consolidated = collect(res_rx, err_rx)?;

    debug!(
        "consolidated {} values from {} files",
        consolidated.len(),
        config.files.len()
    );

    writeln!(out, "{}", op(&consolidated))?;

    // Only reached once both lanes disconnected; every join is immediate.
    for handle in handles {
        let _ = handle.join();
    }

    Ok(())
}

/// One worker's unit of work: open the file, extract the column, report.
///
/// The file handle is owned by this worker alone and closed on drop, on
/// every exit path.
fn process_file(path: &Path, column: usize) -> Result<Vec<f64>> {
    let file = File::open(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    extract::read_column(file, path, column)
}

/// Fan-in merge point.
///
/// Appends successful sequences in completion order (safe because every
/// registered operation is order-independent) and short-circuits on the
/// first message from the error lane. A disconnected lane is swapped for
/// `never()` so the select loop stops polling it; once both lanes are
/// done, all workers have reported.
fn collect(mut results: Receiver<Vec<f64>>, mut errors: Receiver<Error>) -> Result<Vec<f64>> {
    let mut results_open = true;
    let mut errors_open = true;
    let mut consolidated = Vec::new();

    while results_open || errors_open {
        select! {
            recv(results) -> msg => match msg {
                Ok(mut values) => consolidated.append(&mut values),
                Err(_) => {
                    results_open = false;
                    results = never();
                }
            },
            recv(errors) -> msg => match msg {
                Ok(err) => return Err(err),
                Err(_) => {
                    errors_open = false;
                    errors = never();
                }
            },
        }
    }

    Ok(consolidated)
}
