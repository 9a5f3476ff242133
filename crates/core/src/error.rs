//! Error types for the records engine
//!
//! Every failure is a typed value returned to the caller — nothing in the
//! engine throws across the crate boundary, and every error is recoverable
//! by retrying with corrected input or a different operation. Display and
//! `std::error::Error` come from `thiserror`; user-facing messaging is the
//! presentation layer's job, driven by the variant and its details.

use thiserror::Error;

use crate::types::RecordId;
use crate::validation::Violation;

/// Result type alias for record-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the records engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// One or more field rules failed; carries every violation in rule order
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    /// Another live record already holds this name, compared case-insensitively
    #[error("a record named '{0}' already exists")]
    DuplicateName(String),

    /// No live record carries the given id
    #[error("no record with id {0}")]
    NotFound(RecordId),

    /// The trash stack is at its hard capacity; the delete was not applied
    #[error("trash holds {capacity} records; restore or purge before deleting")]
    TrashFull {
        /// The stack's hard capacity
        capacity: usize,
    },

    /// The trash stack is empty; nothing to restore
    #[error("trash is empty")]
    TrashEmpty,

    /// No live record matches the presented family access code
    #[error("access code not recognized")]
    AccessDenied,
}

impl Error {
    /// The violations behind a validation failure, if that is what this is
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            Error::Validation(violations) => Some(violations),
            _ => None,
        }
    }
}

impl From<Vec<Violation>> for Error {
    fn from(violations: Vec<Violation>) -> Self {
        Error::Validation(violations)
    }
}
