//! Shared helpers for the records suite

use chrono::NaiveDate;
use custodia::{CustodyStatus, Gender, RecordDraft, RecordStore};

/// Install a test-friendly tracing subscriber; repeated calls are fine.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A valid draft with the given name and everything else defaulted.
pub fn draft(name: &str) -> RecordDraft {
    RecordDraft {
        name: name.to_string(),
        age: 30,
        gender: Gender::Other,
        address: "1 Main Street".to_string(),
        crime_type: "Theft".to_string(),
        crime_description: "Shoplifting".to_string(),
        admission_date: date(2024, 3, 1),
        sentence_months: 12,
        location: "Block A".to_string(),
        status: CustodyStatus::Active,
        health_status: None,
        family_access_code: None,
        photo_ref: None,
    }
}

/// A store holding the five standard intake records (ids 101–105).
pub fn seeded_store() -> RecordStore {
    RecordStore::seeded(Default::default()).expect("seed data is valid")
}
