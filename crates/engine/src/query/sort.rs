//! Stable comparison sorts over record snapshots
//!
//! Two textbook algorithms, selected purely by collection size: bubble
//! sort at or below the small-collection threshold, insertion sort above
//! it. Both are stable, so equal keys keep their original relative order,
//! and descending order reverses the comparison predicate rather than the
//! sorted output — ties stay put either way.

use custodia_core::{Record, SortKey, SortOrder};
use std::cmp::Ordering;

/// Sort a snapshot of records without touching the source collection.
///
/// The comparator is chosen once from the key/order pair; name comparison
/// is case-insensitive, the other keys are plain numeric or chronological
/// orderings. Sorting an already-sorted snapshot returns it unchanged.
pub fn sorted_by(
    records: &[Record],
    key: SortKey,
    order: SortOrder,
    small_threshold: usize,
) -> Vec<Record> {
    let mut out = records.to_vec();
    let cmp = comparator(key, order);
    if out.len() <= small_threshold {
        bubble_sort(&mut out, &cmp);
    } else {
        insertion_sort(&mut out, &cmp);
    }
    out
}

/// Build the comparison predicate for a key/order pair.
fn comparator(key: SortKey, order: SortOrder) -> impl Fn(&Record, &Record) -> Ordering {
    move |a, b| {
        let ordering = match key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Id => a.id().cmp(&b.id()),
            SortKey::AdmissionDate => a.admission_date().cmp(&b.admission_date()),
            SortKey::SentenceDuration => a.sentence_months().cmp(&b.sentence_months()),
        };
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Adjacent compare-and-swap passes, stopping early once a full pass makes
/// no swap. Stable; O(n²) worst case.
fn bubble_sort<T>(items: &mut [T], cmp: &impl Fn(&T, &T) -> Ordering) {
    let n = items.len();
    for pass in 1..n {
        let mut swapped = false;
        for i in 0..n - pass {
            if cmp(&items[i], &items[i + 1]) == Ordering::Greater {
                items.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Grow a sorted prefix left to right, shifting each new element past the
/// entries that order after it. Stable; near-linear on nearly-sorted
/// input, O(n²) worst case.
fn insertion_sort<T>(items: &mut [T], cmp: &impl Fn(&T, &T) -> Ordering) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
