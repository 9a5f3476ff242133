//! Record search: linear substring scan and bisecting id lookup
//!
//! The two strategies carry different contracts. The linear scan works on
//! any ordering and supports partial matches; the bisection requires input
//! sorted ascending by id and finds exact ids only. Sorting the input is
//! the caller's job — the store sorts a snapshot before bisecting.

use custodia_core::{Record, RecordId};
use std::cmp::Ordering;

/// Case-insensitive substring match against name or crime type.
///
/// Visits every record and returns all matches in the input's order. An
/// empty term matches everything. O(n).
pub fn by_name_or_crime<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    let needle = term.trim().to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle)
                || r.crime_type.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Locate `target` in a slice sorted ascending by id.
///
/// Classic bisection: probe the midpoint, narrow to the half that can
/// still contain the target, stop on a hit or an empty window. An
/// n-element slice is resolved in at most ceil(log2(n)) + 1 probes.
///
/// The sorted-input contract is the caller's to uphold; on unsorted input
/// the result is unspecified.
pub fn binary_by_id(sorted: &[Record], target: RecordId) -> Option<usize> {
    bisect(sorted.len(), target, |i| sorted[i].id())
}

/// Bisection over an index space, reading ids through `id_at`.
fn bisect(len: usize, target: RecordId, id_at: impl Fn(usize) -> RecordId) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let mut lo = 0usize;
    let mut hi = len - 1;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match id_at(mid).cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                hi = mid - 1;
            }
        }
    }
    None
}
