//! Run coordinator: copy, count from zero, time, sort.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::compare::SortContext;
use crate::config::{RunOptions, SortKey};
use crate::data::FireRecord;
use crate::errors::SortError;
use crate::metrics::{RunReport, SortCounters};
use crate::sorting::{Algorithm, SortOutcome, sort};

/// Result of one run: the privately owned sorted copy and its measurements.
#[derive(Debug)]
pub struct SortRun {
    /// Algorithm that produced `records`.
    pub algorithm: Algorithm,
    /// Key the run sorted by.
    pub key: SortKey,
    /// Working copy, sorted unless `outcome` says otherwise.
    pub records: Vec<FireRecord>,
    /// Final comparison and movement counts.
    pub counters: SortCounters,
    /// Whether the copy ended up sorted.
    pub outcome: SortOutcome,
    /// Wall time spent inside the algorithm.
    pub elapsed: Duration,
    /// Monotonic start of the run, used for cumulative viewer timings.
    pub started: Instant,
    /// Wall-clock start of the run.
    pub started_at: DateTime<Utc>,
}

impl SortRun {
    /// Serializable summary for logs and `--report-json`.
    pub fn report(&self) -> RunReport {
        RunReport {
            algorithm: self.algorithm.label().to_string(),
            key: self.key.label().to_string(),
            records: self.records.len(),
            comparisons: self.counters.comparisons,
            movements: self.counters.movements,
            elapsed_secs: self.elapsed.as_secs_f64(),
            outcome: self.outcome.label().to_string(),
            started_at: self.started_at,
        }
    }
}

/// Sort a private copy of `dataset` by `key` with `algorithm`.
///
/// `dataset` is never modified. Allocation failure for the working copy is
/// reported as [`SortError::ResourceExhausted`].
pub fn run_sort(
    dataset: &[FireRecord],
    key: SortKey,
    algorithm: Algorithm,
    options: &RunOptions,
) -> Result<SortRun, SortError> {
    let mut records: Vec<FireRecord> = Vec::new();
    records
        .try_reserve_exact(dataset.len())
        .map_err(|_| SortError::ResourceExhausted {
            what: "working copy",
            requested: dataset.len(),
        })?;
    records.extend_from_slice(dataset);

    let mut counters = SortCounters::default();

    info!(
        algorithm = algorithm.label(),
        key = key.label(),
        records = records.len(),
        "sort run started"
    );
    let started_at = Utc::now();
    let started = Instant::now();
    let outcome = {
        let mut ctx = SortContext::new(key, &mut counters);
        sort(algorithm, &mut records, &mut ctx, options)?
    };
    let elapsed = started.elapsed();
    info!(
        algorithm = algorithm.label(),
        outcome = outcome.label(),
        comparisons = counters.comparisons,
        movements = counters.movements,
        elapsed_secs = elapsed.as_secs_f64(),
        "sort run finished"
    );

    Ok(SortRun {
        algorithm,
        key,
        records,
        counters,
        outcome,
        elapsed,
        started,
        started_at,
    })
}
