//! Store configuration
//!
//! Capacities and thresholds for one store instance, handed to the
//! constructor as plain data — the engine reads no files. The defaults
//! come from the shared limits in `custodia-core`.

use custodia_core::limits::{RECENT_CAPACITY, SMALL_SORT_THRESHOLD, TRASH_CAPACITY};
use serde::{Deserialize, Serialize};

/// Tunables for a [`crate::store::RecordStore`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Hard capacity of the trash stack.
    #[serde(default = "default_trash_capacity")]
    pub trash_capacity: usize,

    /// Display capacity of the recent-activity queue.
    #[serde(default = "default_recent_capacity")]
    pub recent_capacity: usize,

    /// Collections at or below this size are sorted with bubble sort;
    /// larger ones use insertion sort.
    #[serde(default = "default_small_sort_threshold")]
    pub small_sort_threshold: usize,

    /// First identifier a fresh store allocates.
    #[serde(default = "default_first_id")]
    pub first_id: u64,
}

fn default_trash_capacity() -> usize {
    TRASH_CAPACITY
}

fn default_recent_capacity() -> usize {
    RECENT_CAPACITY
}

fn default_small_sort_threshold() -> usize {
    SMALL_SORT_THRESHOLD
}

fn default_first_id() -> u64 {
    101
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            trash_capacity: default_trash_capacity(),
            recent_capacity: default_recent_capacity(),
            small_sort_threshold: default_small_sort_threshold(),
            first_id: default_first_id(),
        }
    }
}
