use crate::compare::SortContext;
use crate::data::FireRecord;

/// Shift-based insertion sort.
///
/// Each shift counts as one movement and so does the final placement, even
/// when the element does not move.
pub fn insertion_sort(records: &mut [FireRecord], ctx: &mut SortContext<'_>) {
    for i in 1..records.len() {
        // records[..i] is untouched until the slot is found.
        let mut j = i;
        while j > 0 && ctx.less_at(records, i, j - 1) {
            j -= 1;
        }
        records[j..=i].rotate_right(1);
        ctx.moved((i - j) as u64 + 1);
    }
}

/// Shell sort with the halving gap sequence `n/2, n/4, ..., 1`.
///
/// Movements are counted like [`insertion_sort`]: one per gapped shift plus
/// one per placement.
pub fn shell_sort(records: &mut [FireRecord], ctx: &mut SortContext<'_>) {
    let len = records.len();
    let mut gap = len / 2;
    while gap > 0 {
        for i in gap..len {
            let mut j = i;
            while j >= gap && ctx.less_at(records, i, j - gap) {
                j -= gap;
            }
            let mut k = i;
            while k > j {
                records.swap(k, k - gap);
                k -= gap;
            }
            ctx.moved(((i - j) / gap) as u64 + 1);
        }
        gap /= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SortCounters;
    use crate::sorting::test_support::{KEY, keys, records};

    #[test]
    fn insertion_counts_placement_on_sorted_input() {
        let mut data = records(&["a", "b", "c", "d", "e"]);
        let mut counters = SortCounters::default();
        insertion_sort(&mut data, &mut SortContext::new(KEY, &mut counters));
        assert_eq!(counters.comparisons, 4);
        assert_eq!(counters.movements, 4);
    }

    #[test]
    fn insertion_counts_every_shift() {
        let mut data = records(&["c", "b", "a"]);
        let mut counters = SortCounters::default();
        insertion_sort(&mut data, &mut SortContext::new(KEY, &mut counters));
        assert_eq!(keys(&data), vec!["a", "b", "c"]);
        // i=1: 1 comparison, 1 shift + placement; i=2: 2 comparisons, 2 shifts + placement.
        assert_eq!(counters.comparisons, 3);
        assert_eq!(counters.movements, 5);
    }

    #[test]
    fn insertion_is_stable() {
        let mut data = records(&["b", "a", "b", "a"]);
        let mut counters = SortCounters::default();
        insertion_sort(&mut data, &mut SortContext::new(KEY, &mut counters));
        let ids: Vec<&str> = data.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "0", "2"]);
    }

    #[test]
    fn shell_on_sorted_input_places_once_per_element_and_gap() {
        let mut data = records(&["a", "b", "c", "d"]);
        let mut counters = SortCounters::default();
        shell_sort(&mut data, &mut SortContext::new(KEY, &mut counters));
        // gap 2: i=2,3; gap 1: i=1,2,3.
        assert_eq!(counters.comparisons, 5);
        assert_eq!(counters.movements, 5);
    }

    #[test]
    fn shell_sorts_gapped_runs() {
        let mut data = records(&["f", "e", "d", "c", "b", "a", "c"]);
        let mut counters = SortCounters::default();
        shell_sort(&mut data, &mut SortContext::new(KEY, &mut counters));
        assert_eq!(keys(&data), vec!["a", "b", "c", "c", "d", "e", "f"]);
    }

    #[test]
    fn shell_preserves_gapped_shift_order() {
        // gap 1 only (n = 2 or 3): behaves exactly like insertion sort.
        let mut shell = records(&["c", "a", "b"]);
        let mut insertion = shell.clone();
        let mut shell_counters = SortCounters::default();
        let mut insertion_counters = SortCounters::default();
        shell_sort(&mut shell, &mut SortContext::new(KEY, &mut shell_counters));
        insertion_sort(
            &mut insertion,
            &mut SortContext::new(KEY, &mut insertion_counters),
        );
        assert_eq!(shell, insertion);
        assert_eq!(shell_counters, insertion_counters);
    }
}
