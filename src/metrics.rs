use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Instrumentation counters for a single run.
///
/// Owned by the run coordinator and borrowed by the engine while sorting.
/// A fresh run starts from `Default`; both counters only ever increase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCounters {
    /// Record comparisons performed.
    pub comparisons: u64,
    /// Record relocations performed (an exchange counts once).
    pub movements: u64,
}

impl SortCounters {
    /// Count one comparison.
    pub fn record_comparison(&mut self) {
        self.comparisons = self.comparisons.saturating_add(1);
    }

    /// Count `count` movements.
    pub fn record_movements(&mut self, count: u64) {
        self.movements = self.movements.saturating_add(count);
    }
}

/// Serializable summary of one finished run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Algorithm label, e.g. `merge`.
    pub algorithm: String,
    /// Sort key label, e.g. `timestamp`.
    pub key: String,
    /// Records in the sorted copy.
    pub records: usize,
    /// Comparisons performed by the run.
    pub comparisons: u64,
    /// Movements performed by the run.
    pub movements: u64,
    /// Wall time spent inside the algorithm, in seconds.
    pub elapsed_secs: f64,
    /// `sorted` or `attempt_limit_reached`.
    pub outcome: String,
    /// Wall-clock start of the run.
    pub started_at: DateTime<Utc>,
}
