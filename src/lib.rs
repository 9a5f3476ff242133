//! Custodia — embedded records engine for custodial case management
//!
//! Custodia keeps a facility's records in memory behind a small, typed
//! API: validated CRUD over a single record type, substring and exact-id
//! search, stable sorting by a chosen key, a bounded trash bin for
//! soft-deletes, and a bounded feed of recent admissions.
//!
//! # Quick Start
//!
//! ```ignore
//! use custodia::{Custodia, RecordForm, SortKey, SortOrder};
//!
//! // A session pre-populated with the standard intake records
//! let sessions = Custodia::seeded()?;
//!
//! // Roster, alphabetically
//! let roster = sessions.sorted(SortKey::Name, SortOrder::Ascending);
//!
//! // Partial search over names and offenses
//! let hits = sessions.search_by_name_or_crime("rob");
//! ```
//!
//! # Architecture
//!
//! The engine splits across three crates: `custodia-core` (entity,
//! validation, errors), `custodia-engine` (the store, query engine, and
//! bounded containers), and `custodia-api` (the lock-guarded session
//! facade). This crate re-exports the public surface.

pub use custodia_api::Custodia;
pub use custodia_core::{
    error::{Error, Result},
    limits,
    record::{release_date_for, Record, RecordDraft, RecordForm},
    types::{CustodyStatus, Gender, RecordId, SortKey, SortOrder},
    validation::{self, Violation},
};
pub use custodia_engine::{seed, BoundedQueue, BoundedStack, RecordStore, StoreConfig};
