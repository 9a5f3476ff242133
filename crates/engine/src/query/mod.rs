//! Query engine: search and sort over record snapshots
//!
//! Everything here is read-only — functions take slices, never mutate
//! them, and hand back indices or fresh collections. The store composes
//! these with its own snapshots.

pub mod search;
pub mod sort;
