use crate::compare::SortContext;
use crate::data::FireRecord;
use crate::errors::SortError;

/// Top-down merge sort over a single auxiliary buffer the size of the slice.
///
/// Stable: on equal keys the left run wins. Every element written back from
/// the buffer counts as one movement.
pub fn merge_sort(records: &mut [FireRecord], ctx: &mut SortContext<'_>) -> Result<(), SortError> {
    let len = records.len();
    if len < 2 {
        return Ok(());
    }
    let mut aux: Vec<FireRecord> = Vec::new();
    aux.try_reserve_exact(len)
        .map_err(|_| SortError::ResourceExhausted {
            what: "merge buffer",
            requested: len,
        })?;
    aux.extend_from_slice(records);
    merge_range(records, &mut aux, 0, len, ctx);
    Ok(())
}

fn merge_range(
    records: &mut [FireRecord],
    aux: &mut [FireRecord],
    left: usize,
    right: usize,
    ctx: &mut SortContext<'_>,
) {
    if right - left <= 1 {
        return;
    }
    let mid = (left + right) / 2;
    merge_range(records, aux, left, mid, ctx);
    merge_range(records, aux, mid, right, ctx);
    merge(records, aux, left, mid, right, ctx);
}

fn merge(
    records: &mut [FireRecord],
    aux: &mut [FireRecord],
    left: usize,
    mid: usize,
    right: usize,
    ctx: &mut SortContext<'_>,
) {
    let (mut i, mut j, mut k) = (left, mid, left);
    while i < mid && j < right {
        if !ctx.less_at(records, j, i) {
            aux[k].clone_from(&records[i]);
            i += 1;
        } else {
            aux[k].clone_from(&records[j]);
            j += 1;
        }
        k += 1;
    }
    for idx in i..mid {
        aux[k].clone_from(&records[idx]);
        k += 1;
    }
    for idx in j..right {
        aux[k].clone_from(&records[idx]);
        k += 1;
    }
    // aux[left..right] is fully rewritten by every merge before it is read,
    // so the stale values swapped into it are never observed.
    records[left..right].swap_with_slice(&mut aux[left..right]);
    ctx.moved((right - left) as u64);
}

/// Quick sort with a Lomuto partition around the last element of each range.
///
/// Sub-ranges are processed from an explicit work stack, so already-sorted
/// input cannot exhaust the call stack.
pub fn quick_sort(records: &mut [FireRecord], ctx: &mut SortContext<'_>) {
    if records.len() < 2 {
        return;
    }
    let mut pending = vec![(0usize, records.len() - 1)];
    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }
        let pivot = partition(records, low, high, ctx);
        if pivot + 1 < high {
            pending.push((pivot + 1, high));
        }
        if pivot > low + 1 {
            pending.push((low, pivot - 1));
        }
    }
}

fn partition(
    records: &mut [FireRecord],
    low: usize,
    high: usize,
    ctx: &mut SortContext<'_>,
) -> usize {
    let mut store = low;
    for j in low..high {
        if ctx.less_at(records, j, high) {
            ctx.swap(records, store, j);
            store += 1;
        }
    }
    ctx.swap(records, store, high);
    store
}
