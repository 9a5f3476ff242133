//! Foundational types for custodial records
//!
//! This module defines:
//! - RecordId: unique identifier for a record
//! - Gender / CustodyStatus: closed enumerations over record attributes
//! - SortKey / SortOrder: ordering selectors consumed by the query engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a custodial record
///
/// Identifiers are positive integers allocated by the store, monotonically
/// non-decreasing over the store's lifetime. An id is never reused, even
/// after the record it named is deleted and purged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(u64);

impl RecordId {
    /// Create a RecordId from a raw integer
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value of this id
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender recorded at intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Any other or undisclosed gender
    Other,
}

impl Gender {
    /// Parse presentation input, case-insensitively.
    ///
    /// Accepts the full word or a single-letter abbreviation for
    /// male/female. Returns `None` for anything else.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }

    /// Canonical display form
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Custody status of a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustodyStatus {
    /// Currently held
    #[default]
    Active,
    /// Sentence served or otherwise released
    Released,
    /// Moved to another facility
    Transferred,
}

impl CustodyStatus {
    /// Parse presentation input, case-insensitively
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "active" => Some(CustodyStatus::Active),
            "released" => Some(CustodyStatus::Released),
            "transferred" => Some(CustodyStatus::Transferred),
            _ => None,
        }
    }

    /// Canonical display form
    pub fn as_str(&self) -> &'static str {
        match self {
            CustodyStatus::Active => "Active",
            CustodyStatus::Released => "Released",
            CustodyStatus::Transferred => "Transferred",
        }
    }
}

impl fmt::Display for CustodyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field selector for the sort engine
///
/// Each key maps to a pure comparator chosen once per sort call, rather
/// than inspecting field types at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Lexicographic by name, case-insensitive
    Name,
    /// Numeric by id
    Id,
    /// Chronological by admission date
    AdmissionDate,
    /// Numeric by sentence duration in months
    SentenceDuration,
}

/// Direction for the sort engine
///
/// `Descending` reverses the comparison predicate, not the sorted output,
/// so ties keep their original relative order in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}
