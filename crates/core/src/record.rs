//! The custodial record entity and its input forms
//!
//! ## Design
//!
//! A [`Record`] guards two things behind accessors: its identity (`id` is
//! assigned once by the store and never changes) and its term — the
//! admission date, sentence duration, and the release date derived from
//! them. The release date is recomputed on every write to the term fields,
//! so it can never drift. The remaining attributes are plain data.
//!
//! Input arrives in two shapes: [`RecordDraft`] is the typed attribute set
//! used by create/update, and [`RecordForm`] is the raw string bundle a
//! presentation layer delivers, with its own parse step that reports
//! unparseable fields as [`Violation::Format`].

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::limits::DEFAULT_HEALTH_STATUS;
use crate::types::{CustodyStatus, Gender, RecordId};
use crate::validation::{self, Violation};

/// Derive a release date from an admission date and a sentence duration.
///
/// Saturates at the calendar horizon rather than overflowing; validated
/// inputs (dates not in the future, at most 1200 months) never reach it.
pub fn release_date_for(admission: NaiveDate, sentence_months: u32) -> NaiveDate {
    admission
        .checked_add_months(Months::new(sentence_months))
        .unwrap_or(NaiveDate::MAX)
}

/// A single custodial record
///
/// Constructed by the store with a freshly allocated id; mutated only
/// through [`Record::apply`], which keeps the derived release date
/// consistent with the term fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    /// Full name; unique case-insensitively across the live collection
    pub name: String,
    /// Age at intake, 18–120
    pub age: u8,
    /// Gender recorded at intake
    pub gender: Gender,
    /// Last known address, possibly empty
    pub address: String,
    /// Offense category, e.g. "Robbery"
    pub crime_type: String,
    /// Free-text description of the offense
    pub crime_description: String,
    admission_date: NaiveDate,
    sentence_months: u32,
    release_date: NaiveDate,
    /// Cell block or facility location
    pub location: String,
    /// Custody status
    pub status: CustodyStatus,
    /// Free-text health note, defaulted at intake
    pub health_status: String,
    /// Opaque alphanumeric credential for family read access
    pub family_access_code: String,
    /// Optional photo path; never interpreted by the engine
    pub photo_ref: Option<String>,
}

impl Record {
    /// Build a record from a validated draft.
    ///
    /// The draft should have been normalized and validated first; the store
    /// is the only expected caller. A missing health status falls back to
    /// the intake default, and a missing access code becomes empty — the
    /// store mints one before constructing.
    pub fn new(id: RecordId, draft: RecordDraft) -> Self {
        let release_date = release_date_for(draft.admission_date, draft.sentence_months);
        Self {
            id,
            name: draft.name,
            age: draft.age,
            gender: draft.gender,
            address: draft.address,
            crime_type: draft.crime_type,
            crime_description: draft.crime_description,
            admission_date: draft.admission_date,
            sentence_months: draft.sentence_months,
            release_date,
            location: draft.location,
            status: draft.status,
            health_status: draft
                .health_status
                .unwrap_or_else(|| DEFAULT_HEALTH_STATUS.to_string()),
            family_access_code: draft.family_access_code.unwrap_or_default(),
            photo_ref: draft.photo_ref,
        }
    }

    /// The immutable identity of this record
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Date the sentence began
    pub fn admission_date(&self) -> NaiveDate {
        self.admission_date
    }

    /// Sentence duration in months
    pub fn sentence_months(&self) -> u32 {
        self.sentence_months
    }

    /// Release date, always `admission_date + sentence_months`
    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    /// Overwrite the mutable attributes from a draft, recomputing the
    /// release date when the admission date or duration changed.
    ///
    /// A `None` health status or access code leaves the current value in
    /// place; a `None` photo clears it.
    pub fn apply(&mut self, draft: RecordDraft) {
        self.name = draft.name;
        self.age = draft.age;
        self.gender = draft.gender;
        self.address = draft.address;
        self.crime_type = draft.crime_type;
        self.crime_description = draft.crime_description;
        self.location = draft.location;
        self.status = draft.status;
        if let Some(health) = draft.health_status {
            self.health_status = health;
        }
        if let Some(code) = draft.family_access_code {
            self.family_access_code = code;
        }
        self.photo_ref = draft.photo_ref;

        if self.admission_date != draft.admission_date
            || self.sentence_months != draft.sentence_months
        {
            self.admission_date = draft.admission_date;
            self.sentence_months = draft.sentence_months;
            self.release_date = release_date_for(self.admission_date, self.sentence_months);
        }
    }
}

/// The mutable attribute set for create and update
///
/// Everything a caller may set; identity and the derived release date are
/// the store's business. `health_status` and `family_access_code` are
/// optional — defaulted and minted respectively at creation, left
/// unchanged on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    /// Full name
    pub name: String,
    /// Age at intake
    pub age: u8,
    /// Gender
    pub gender: Gender,
    /// Last known address
    pub address: String,
    /// Offense category
    pub crime_type: String,
    /// Free-text offense description
    pub crime_description: String,
    /// Date the sentence began
    pub admission_date: NaiveDate,
    /// Sentence duration in months
    pub sentence_months: u32,
    /// Cell block or facility location
    pub location: String,
    /// Custody status
    pub status: CustodyStatus,
    /// Health note; `None` uses the intake default / keeps the current value
    pub health_status: Option<String>,
    /// Family access code; `None` mints one / keeps the current value
    pub family_access_code: Option<String>,
    /// Optional photo path
    pub photo_ref: Option<String>,
}

impl RecordDraft {
    /// Trim surrounding whitespace from every text field.
    ///
    /// Applied by the store before validation, so stored values and
    /// uniqueness checks agree on the trimmed form.
    pub fn normalized(mut self) -> Self {
        fn trim(s: &mut String) {
            let t = s.trim();
            if t.len() != s.len() {
                *s = t.to_string();
            }
        }
        trim(&mut self.name);
        trim(&mut self.address);
        trim(&mut self.crime_type);
        trim(&mut self.crime_description);
        trim(&mut self.location);
        if let Some(health) = &mut self.health_status {
            trim(health);
        }
        if let Some(code) = &mut self.family_access_code {
            trim(code);
        }
        if let Some(photo) = &mut self.photo_ref {
            trim(photo);
        }
        self
    }
}

/// Raw string input as a presentation layer delivers it
///
/// Numeric and date fields arrive as text; [`RecordForm::parse`] turns the
/// bundle into a [`RecordDraft`] or the complete list of violations, with
/// unparseable values reported as format failures distinct from
/// out-of-range ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordForm {
    /// Full name
    pub name: String,
    /// Age, decimal text
    pub age: String,
    /// Gender, e.g. "Male" / "F"
    pub gender: String,
    /// Last known address
    pub address: String,
    /// Offense category
    pub crime_type: String,
    /// Free-text offense description
    pub crime_description: String,
    /// Admission date, `YYYY-MM-DD`
    pub admission_date: String,
    /// Sentence duration in months, decimal text
    pub sentence_months: String,
    /// Cell block or facility location
    pub location: String,
    /// Custody status; empty means Active
    pub status: String,
    /// Health note; empty uses the intake default
    pub health_status: String,
    /// Family access code; empty mints one at creation
    pub family_access_code: String,
    /// Photo path; empty means none
    pub photo_ref: String,
}

impl RecordForm {
    /// Parse and validate raw input in one pass.
    ///
    /// Every field is examined independently — a bad age does not hide a
    /// bad name — and the violations come back in field order. On success
    /// the returned draft is already normalized and valid as of `today`.
    pub fn parse(&self, today: NaiveDate) -> Result<RecordDraft, Vec<Violation>> {
        let mut violations = Vec::new();

        if let Err(v) = validation::check_name(&self.name) {
            violations.push(v);
        }

        let age = match self.age.trim().parse::<i64>() {
            Ok(value) => {
                if let Err(v) = validation::check_age(value) {
                    violations.push(v);
                    None
                } else {
                    Some(value as u8)
                }
            }
            Err(e) => {
                violations.push(Violation::Format {
                    field: "age",
                    detail: format!("not a whole number: {e}"),
                });
                None
            }
        };

        let gender = match Gender::parse(&self.gender) {
            Some(g) => Some(g),
            None => {
                violations.push(Violation::Format {
                    field: "gender",
                    detail: "expected Male, Female or Other".to_string(),
                });
                None
            }
        };

        if let Err(v) = validation::check_address(&self.address) {
            violations.push(v);
        }
        if let Err(v) = validation::check_crime_type(&self.crime_type) {
            violations.push(v);
        }

        let admission_date = match NaiveDate::parse_from_str(self.admission_date.trim(), "%Y-%m-%d")
        {
            Ok(date) => {
                if let Err(v) = validation::check_admission_date(date, today) {
                    violations.push(v);
                    None
                } else {
                    Some(date)
                }
            }
            Err(e) => {
                violations.push(Violation::Format {
                    field: "admission_date",
                    detail: format!("expected YYYY-MM-DD: {e}"),
                });
                None
            }
        };

        let sentence_months = match self.sentence_months.trim().parse::<i64>() {
            Ok(value) => {
                if let Err(v) = validation::check_sentence_months(value) {
                    violations.push(v);
                    None
                } else {
                    Some(value as u32)
                }
            }
            Err(e) => {
                violations.push(Violation::Format {
                    field: "sentence_months",
                    detail: format!("not a whole number: {e}"),
                });
                None
            }
        };

        if let Err(v) = validation::check_location(&self.location) {
            violations.push(v);
        }

        let status = if self.status.trim().is_empty() {
            Some(CustodyStatus::default())
        } else {
            match CustodyStatus::parse(&self.status) {
                Some(s) => Some(s),
                None => {
                    violations.push(Violation::Format {
                        field: "status",
                        detail: "expected Active, Released or Transferred".to_string(),
                    });
                    None
                }
            }
        };

        if !self.family_access_code.trim().is_empty() {
            if let Err(v) = validation::check_access_code(&self.family_access_code) {
                violations.push(v);
            }
        }

        let (Some(age), Some(gender), Some(admission_date), Some(sentence_months), Some(status)) =
            (age, gender, admission_date, sentence_months, status)
        else {
            return Err(violations);
        };
        if !violations.is_empty() {
            return Err(violations);
        }

        fn opt(s: &str) -> Option<String> {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        }

        Ok(RecordDraft {
            name: self.name.clone(),
            age,
            gender,
            address: self.address.clone(),
            crime_type: self.crime_type.clone(),
            crime_description: self.crime_description.clone(),
            admission_date,
            sentence_months,
            location: self.location.clone(),
            status,
            health_status: opt(&self.health_status),
            family_access_code: opt(&self.family_access_code),
            photo_ref: opt(&self.photo_ref),
        }
        .normalized())
    }
}
