use rand::Rng;
use tracing::warn;

use crate::compare::SortContext;
use crate::data::FireRecord;
use crate::sorting::SortOutcome;

/// Shuffle until sorted or until `max_attempts` shuffles have been spent.
///
/// Reaching the limit leaves `records` in whatever order the last shuffle
/// produced and reports [`SortOutcome::AttemptLimitReached`].
pub fn bogo_sort<R: Rng + ?Sized>(
    records: &mut [FireRecord],
    ctx: &mut SortContext<'_>,
    rng: &mut R,
    max_attempts: u64,
) -> SortOutcome {
    let mut attempts = 0u64;
    while !is_sorted(records, ctx) {
        attempts += 1;
        if attempts > max_attempts {
            warn!(
                records = records.len(),
                max_attempts,
                comparisons = ctx.counters().comparisons,
                "bogo sort attempt limit reached"
            );
            return SortOutcome::AttemptLimitReached {
                attempts: max_attempts,
            };
        }
        shuffle(records, ctx, rng);
    }
    SortOutcome::Sorted
}

/// Linear sortedness check; one comparison per adjacent pair examined.
pub fn is_sorted(records: &[FireRecord], ctx: &mut SortContext<'_>) -> bool {
    for i in 1..records.len() {
        if ctx.less_at(records, i, i - 1) {
            return false;
        }
    }
    true
}

/// Fisher-Yates shuffle; every exchange counts, including self-exchanges.
pub fn shuffle<R: Rng + ?Sized>(records: &mut [FireRecord], ctx: &mut SortContext<'_>, rng: &mut R) {
    for i in (1..records.len()).rev() {
        let j = rng.random_range(0..=i);
        ctx.swap(records, i, j);
    }
}
