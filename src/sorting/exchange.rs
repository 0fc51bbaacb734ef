use crate::compare::SortContext;
use crate::data::FireRecord;

/// Bubble sort with a fixed `n` passes of `n - 1` adjacent comparisons.
///
/// There is no early exit on a swap-free pass, so the comparison count is
/// `n * (n - 1)` for every input of length `n`.
pub fn bubble_sort(records: &mut [FireRecord], ctx: &mut SortContext<'_>) {
    let len = records.len();
    for _ in 0..len {
        for j in 0..len.saturating_sub(1) {
            if ctx.less_at(records, j + 1, j) {
                ctx.swap(records, j, j + 1);
            }
        }
    }
}

/// Selection sort; exchanges only when the suffix minimum is not already in place.
pub fn selection_sort(records: &mut [FireRecord], ctx: &mut SortContext<'_>) {
    let len = records.len();
    if len < 2 {
        return;
    }
    for i in 0..len - 1 {
        let mut min = i;
        for j in i + 1..len {
            if ctx.less_at(records, j, min) {
                min = j;
            }
        }
        if min != i {
            ctx.swap(records, i, min);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SortCounters;
    use crate::sorting::test_support::{KEY, keys, records};

    #[test]
    fn bubble_comparisons_do_not_depend_on_input_order() {
        for input in [["a", "b", "c", "d"], ["d", "c", "b", "a"]] {
            let mut data = records(&input);
            let mut counters = SortCounters::default();
            bubble_sort(&mut data, &mut SortContext::new(KEY, &mut counters));
            assert_eq!(keys(&data), vec!["a", "b", "c", "d"]);
            assert_eq!(counters.comparisons, 12);
        }
    }

    #[test]
    fn bubble_reversed_input_swaps_every_inversion() {
        let mut data = records(&["d", "c", "b", "a"]);
        let mut counters = SortCounters::default();
        bubble_sort(&mut data, &mut SortContext::new(KEY, &mut counters));
        assert_eq!(counters.movements, 6);
    }

    #[test]
    fn bubble_keeps_equal_keys_in_order() {
        let mut data = records(&["b", "a", "b", "a"]);
        let mut counters = SortCounters::default();
        bubble_sort(&mut data, &mut SortContext::new(KEY, &mut counters));
        let ids: Vec<&str> = data.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "0", "2"]);
    }

    #[test]
    fn selection_skips_exchange_when_minimum_in_place() {
        let mut data = records(&["a", "b", "c", "d"]);
        let mut counters = SortCounters::default();
        selection_sort(&mut data, &mut SortContext::new(KEY, &mut counters));
        assert_eq!(counters.comparisons, 6);
        assert_eq!(counters.movements, 0);

        let mut data = records(&["c", "a", "b"]);
        let mut counters = SortCounters::default();
        selection_sort(&mut data, &mut SortContext::new(KEY, &mut counters));
        assert_eq!(keys(&data), vec!["a", "b", "c"]);
        assert_eq!(counters.comparisons, 3);
        assert_eq!(counters.movements, 2);
    }

    #[test]
    fn tiny_inputs_do_no_work() {
        for input in [&[][..], &["x"][..]] {
            let mut data = records(input);
            let mut counters = SortCounters::default();
            bubble_sort(&mut data, &mut SortContext::new(KEY, &mut counters));
            selection_sort(&mut data, &mut SortContext::new(KEY, &mut counters));
            assert_eq!(counters, SortCounters::default());
        }
    }
}
