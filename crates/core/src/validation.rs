//! Field validation for custodial records
//!
//! Every rule is independent. Full-record validation evaluates all of them
//! and reports the complete, ordered list of violations rather than
//! stopping at the first failure; the targeted `check_*` functions back
//! field-level feedback in the presentation layer.
//!
//! Unparseable input is a [`Violation::Format`], a value outside its bounds
//! is a [`Violation::Range`], a missing mandatory field is a
//! [`Violation::Required`], and a character-class failure is a
//! [`Violation::Pattern`]. Nothing in this module panics on malformed
//! input.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::limits::{MAX_ADDRESS_LEN, MAX_AGE, MAX_NAME_LEN, MAX_SENTENCE_MONTHS, MIN_AGE};
use crate::record::RecordDraft;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum Violation {
    /// A mandatory field was left empty
    #[error("{field} is required")]
    Required {
        /// Name of the offending field
        field: &'static str,
    },

    /// A field could not be parsed into its expected type
    #[error("{field}: {detail}")]
    Format {
        /// Name of the offending field
        field: &'static str,
        /// What went wrong during parsing
        detail: String,
    },

    /// A parsed value falls outside its allowed bounds
    #[error("{field} {detail}")]
    Range {
        /// Name of the offending field
        field: &'static str,
        /// The bound that was violated
        detail: &'static str,
    },

    /// A field contains characters outside its allowed class
    #[error("{field}: {detail}")]
    Pattern {
        /// Name of the offending field
        field: &'static str,
        /// The allowed character class
        detail: &'static str,
    },
}

impl Violation {
    /// The field this violation is attached to
    pub fn field(&self) -> &'static str {
        match self {
            Violation::Required { field }
            | Violation::Format { field, .. }
            | Violation::Range { field, .. }
            | Violation::Pattern { field, .. } => field,
        }
    }
}

// ============================================================================
// Targeted field checks
// ============================================================================

/// Name: mandatory, at most [`MAX_NAME_LEN`] characters, drawn from
/// letters, spaces, hyphens, and apostrophes.
pub fn check_name(name: &str) -> Result<(), Violation> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Violation::Required { field: "name" });
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(Violation::Range {
            field: "name",
            detail: "must be at most 100 characters",
        });
    }
    if !name
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'')
    {
        return Err(Violation::Pattern {
            field: "name",
            detail: "letters, spaces, hyphens and apostrophes only",
        });
    }
    Ok(())
}

/// Age: between [`MIN_AGE`] and [`MAX_AGE`] inclusive.
pub fn check_age(age: i64) -> Result<(), Violation> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(Violation::Range {
            field: "age",
            detail: "must be between 18 and 120",
        });
    }
    Ok(())
}

/// Address: optional, at most [`MAX_ADDRESS_LEN`] characters.
pub fn check_address(address: &str) -> Result<(), Violation> {
    if address.trim().chars().count() > MAX_ADDRESS_LEN {
        return Err(Violation::Range {
            field: "address",
            detail: "must be at most 200 characters",
        });
    }
    Ok(())
}

/// Crime type: mandatory.
pub fn check_crime_type(crime_type: &str) -> Result<(), Violation> {
    if crime_type.trim().is_empty() {
        return Err(Violation::Required {
            field: "crime_type",
        });
    }
    Ok(())
}

/// Admission date: never after `today`.
pub fn check_admission_date(date: NaiveDate, today: NaiveDate) -> Result<(), Violation> {
    if date > today {
        return Err(Violation::Range {
            field: "admission_date",
            detail: "may not be in the future",
        });
    }
    Ok(())
}

/// Sentence duration: positive, at most [`MAX_SENTENCE_MONTHS`] months.
pub fn check_sentence_months(months: i64) -> Result<(), Violation> {
    if !(1..=MAX_SENTENCE_MONTHS).contains(&months) {
        return Err(Violation::Range {
            field: "sentence_months",
            detail: "must be between 1 and 1200",
        });
    }
    Ok(())
}

/// Location: mandatory.
pub fn check_location(location: &str) -> Result<(), Violation> {
    if location.trim().is_empty() {
        return Err(Violation::Required { field: "location" });
    }
    Ok(())
}

/// Family access code: mandatory and alphanumeric wherever a caller
/// presents one — enforced before granting family access, and on drafts
/// that carry an explicit code.
pub fn check_access_code(code: &str) -> Result<(), Violation> {
    let code = code.trim();
    if code.is_empty() {
        return Err(Violation::Required {
            field: "family_access_code",
        });
    }
    if !code.chars().all(|c| c.is_alphanumeric()) {
        return Err(Violation::Pattern {
            field: "family_access_code",
            detail: "letters and digits only",
        });
    }
    Ok(())
}

// ============================================================================
// Full-record validation
// ============================================================================

/// Validate a complete draft against every applicable rule.
///
/// Rules run in a fixed field order and none of them short-circuits the
/// rest, so the caller gets the full picture in one pass. Gender membership
/// is enforced by the type system; unknown presentation input is reported
/// by [`crate::record::RecordForm::parse`] instead.
pub fn validate_draft(draft: &RecordDraft, today: NaiveDate) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();

    let checks = [
        check_name(&draft.name),
        check_age(draft.age as i64),
        check_address(&draft.address),
        check_crime_type(&draft.crime_type),
        check_admission_date(draft.admission_date, today),
        check_sentence_months(draft.sentence_months as i64),
        check_location(&draft.location),
    ];
    for check in checks {
        if let Err(violation) = check {
            violations.push(violation);
        }
    }
    if let Some(code) = &draft.family_access_code {
        if let Err(violation) = check_access_code(code) {
            violations.push(violation);
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
