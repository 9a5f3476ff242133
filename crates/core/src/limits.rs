//! Validation bounds and container capacities
//!
//! Every limit the engine enforces lives here, so the validation rules, the
//! store, and the tests agree on a single source of truth.

/// Maximum length of a record name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of an address, in characters.
pub const MAX_ADDRESS_LEN: usize = 200;

/// Minimum age accepted at intake.
pub const MIN_AGE: i64 = 18;

/// Maximum age accepted at intake.
pub const MAX_AGE: i64 = 120;

/// Maximum sentence duration, in months (100 years).
pub const MAX_SENTENCE_MONTHS: i64 = 1200;

/// Hard capacity of the trash stack.
pub const TRASH_CAPACITY: usize = 5;

/// Display capacity of the recent-activity queue.
pub const RECENT_CAPACITY: usize = 5;

/// Collections at or below this size are sorted with bubble sort;
/// larger collections use insertion sort.
pub const SMALL_SORT_THRESHOLD: usize = 10;

/// Health status assigned at intake when none is provided.
pub const DEFAULT_HEALTH_STATUS: &str = "Stable";
