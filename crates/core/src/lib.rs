//! Core types for the Custodia records engine
//!
//! This crate defines the foundational types used throughout the system:
//! - RecordId: store-allocated record identifier
//! - Record / RecordDraft / RecordForm: the custodial record entity and its inputs
//! - Gender, CustodyStatus: closed attribute enumerations
//! - SortKey, SortOrder: ordering selectors for the query engine
//! - Violation: field-level validation failures
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod record;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{Error, Result};
pub use record::{release_date_for, Record, RecordDraft, RecordForm};
pub use types::{CustodyStatus, Gender, RecordId, SortKey, SortOrder};
pub use validation::{validate_draft, Violation};
