//! Key comparison and the instrumentation point every algorithm routes through.

use std::cmp::Ordering;

use crate::config::SortKey;
use crate::data::FireRecord;
use crate::metrics::SortCounters;

/// Uninstrumented byte-wise comparison of the field selected by `key`.
///
/// Used by tests and callers that verify results; algorithms must go through
/// [`SortContext`] instead.
pub fn compare_by_key(a: &FireRecord, b: &FireRecord, key: SortKey) -> Ordering {
    let field = key.field();
    a.field(field).as_bytes().cmp(b.field(field).as_bytes())
}

/// Comparator bound to a key plus the run's counters.
///
/// Each comparison adds one to `comparisons`; each exchange or single-slot
/// write adds one to `movements`.
#[derive(Debug)]
pub struct SortContext<'c> {
    key: SortKey,
    counters: &'c mut SortCounters,
}

impl<'c> SortContext<'c> {
    /// Bind `key` and the counters this context increments.
    pub fn new(key: SortKey, counters: &'c mut SortCounters) -> Self {
        Self { key, counters }
    }

    /// Current counter values.
    pub fn counters(&self) -> SortCounters {
        *self.counters
    }

    /// Compare two records under the bound key.
    pub fn compare(&mut self, a: &FireRecord, b: &FireRecord) -> Ordering {
        self.counters.record_comparison();
        compare_by_key(a, b, self.key)
    }

    /// `true` when `a` orders strictly before `b`.
    pub fn less(&mut self, a: &FireRecord, b: &FireRecord) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// `true` when `records[i]` orders strictly before `records[j]`.
    pub fn less_at(&mut self, records: &[FireRecord], i: usize, j: usize) -> bool {
        self.less(&records[i], &records[j])
    }

    /// Exchange two slots; counted as one movement even when `i == j`.
    pub fn swap(&mut self, records: &mut [FireRecord], i: usize, j: usize) {
        records.swap(i, j);
        self.counters.record_movements(1);
    }

    /// Account for `count` single-slot writes performed by the caller.
    pub fn moved(&mut self, count: u64) {
        self.counters.record_movements(count);
    }
}
