use crate::compare::SortContext;
use crate::data::FireRecord;

/// In-place heap sort over a max-heap built bottom-up.
pub fn heap_sort(records: &mut [FireRecord], ctx: &mut SortContext<'_>) {
    let len = records.len();
    if len < 2 {
        return;
    }
    for root in (0..len / 2).rev() {
        sift_down(records, len, root, ctx);
    }
    for end in (1..len).rev() {
        ctx.swap(records, 0, end);
        sift_down(records, end, 0, ctx);
    }
}

/// Restore the heap property below `root` within `records[..len]`.
fn sift_down(records: &mut [FireRecord], len: usize, mut root: usize, ctx: &mut SortContext<'_>) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;
        if left < len && ctx.less_at(records, largest, left) {
            largest = left;
        }
        if right < len && ctx.less_at(records, largest, right) {
            largest = right;
        }
        if largest == root {
            return;
        }
        ctx.swap(records, root, largest);
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SortCounters;
    use crate::sorting::test_support::{KEY, keys, records};

    #[test]
    fn heap_sorts_mixed_input() {
        let mut data = records(&["m", "c", "x", "a", "c", "q", "b"]);
        let mut counters = SortCounters::default();
        heap_sort(&mut data, &mut SortContext::new(KEY, &mut counters));
        assert_eq!(keys(&data), vec!["a", "b", "c", "c", "m", "q", "x"]);
    }

    #[test]
    fn heap_two_elements() {
        let mut data = records(&["b", "a"]);
        let mut counters = SortCounters::default();
        heap_sort(&mut data, &mut SortContext::new(KEY, &mut counters));
        assert_eq!(keys(&data), vec!["a", "b"]);
        // build: one comparison, no exchange; extract: one exchange, heap of one.
        assert_eq!(counters.comparisons, 1);
        assert_eq!(counters.movements, 1);
    }
}
