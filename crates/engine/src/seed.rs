//! Fixed intake records a fresh deployment starts with
//!
//! Data is memory-resident for the process lifetime, so a new store is
//! seeded through the normal admission path rather than loaded from
//! anywhere. Five records, admitted in this order under the default
//! configuration, take ids 101 through 105.

use chrono::NaiveDate;
use custodia_core::{CustodyStatus, Gender, RecordDraft};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // the seed table only carries dates that exist
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// The standard intake drafts, in admission order.
pub fn sample_drafts() -> Vec<RecordDraft> {
    vec![
        RecordDraft {
            name: "Marcus Webb".to_string(),
            age: 34,
            gender: Gender::Male,
            address: "41 Dockside Avenue".to_string(),
            crime_type: "Robbery".to_string(),
            crime_description: "Armed robbery of a jewelry store".to_string(),
            admission_date: date(2023, 6, 12),
            sentence_months: 72,
            location: "Block B".to_string(),
            status: CustodyStatus::Active,
            health_status: None,
            family_access_code: Some("WEBB4412".to_string()),
            photo_ref: None,
        },
        RecordDraft {
            name: "Elena Vance".to_string(),
            age: 29,
            gender: Gender::Female,
            address: "7 Mill Road".to_string(),
            crime_type: "Fraud".to_string(),
            crime_description: "Long-running invoice fraud scheme".to_string(),
            admission_date: date(2024, 1, 15),
            sentence_months: 36,
            location: "Block A".to_string(),
            status: CustodyStatus::Active,
            health_status: None,
            family_access_code: Some("VANCE2077".to_string()),
            photo_ref: None,
        },
        RecordDraft {
            name: "Dmitri Sokolov".to_string(),
            age: 42,
            gender: Gender::Male,
            address: "19 Granite Street".to_string(),
            crime_type: "Arson".to_string(),
            crime_description: "Warehouse fire set to destroy evidence".to_string(),
            admission_date: date(2022, 11, 3),
            sentence_months: 120,
            location: "Block D".to_string(),
            status: CustodyStatus::Active,
            health_status: Some("Asthmatic".to_string()),
            family_access_code: Some("SOKO9315".to_string()),
            photo_ref: None,
        },
        RecordDraft {
            name: "Priya Raman".to_string(),
            age: 26,
            gender: Gender::Female,
            address: String::new(),
            crime_type: "Burglary".to_string(),
            crime_description: "Series of residential break-ins".to_string(),
            admission_date: date(2024, 8, 20),
            sentence_months: 24,
            location: "Block A".to_string(),
            status: CustodyStatus::Active,
            health_status: None,
            family_access_code: Some("RAMAN1188".to_string()),
            photo_ref: None,
        },
        RecordDraft {
            name: "Tomas Keller".to_string(),
            age: 38,
            gender: Gender::Male,
            address: "3 Beacon Court".to_string(),
            crime_type: "Assault".to_string(),
            crime_description: "Aggravated assault outside a bar".to_string(),
            admission_date: date(2023, 2, 27),
            sentence_months: 48,
            location: "Block C".to_string(),
            status: CustodyStatus::Transferred,
            health_status: None,
            family_access_code: Some("KELL7640".to_string()),
            photo_ref: None,
        },
    ]
}
