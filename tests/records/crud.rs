//! CRUD behavior of the record store

use crate::common::*;
use custodia::{limits, Error, RecordId, RecordStore, Violation};

// ============================================================================
// Create & read
// ============================================================================

#[test]
fn create_then_read_returns_the_trimmed_input() {
    let mut store = RecordStore::new();
    let mut d = draft("  Ada Byron ");
    d.location = " Block A ".to_string();
    let id = store.create(d).unwrap();

    let record = store.read(id).unwrap();
    assert_eq!(record.name, "Ada Byron");
    assert_eq!(record.location, "Block A");
    assert_eq!(record.age, 30);
    assert_eq!(record.health_status, limits::DEFAULT_HEALTH_STATUS);
}

#[test]
fn release_date_is_admission_plus_sentence() {
    let mut store = RecordStore::new();
    let mut d = draft("Ada Byron");
    d.admission_date = date(2024, 1, 15);
    d.sentence_months = 18;
    let id = store.create(d).unwrap();

    let record = store.read(id).unwrap();
    assert_eq!(record.release_date(), date(2025, 7, 15));
}

#[test]
fn create_rejects_invalid_drafts_with_all_violations() {
    let mut store = RecordStore::new();
    let mut d = draft("B4D N4ME");
    d.age = 12;
    d.location = String::new();

    let err = store.create(d).unwrap_err();
    let violations = err.violations().expect("validation error");
    assert_eq!(violations.len(), 3);
    assert!(matches!(violations[0], Violation::Pattern { .. }));
    assert!(store.is_empty());
}

#[test]
fn duplicate_names_leave_the_collection_unchanged() {
    let mut store = RecordStore::new();
    store.create(draft("Ada Byron")).unwrap();

    let err = store.create(draft("ADA BYRON")).unwrap_err();
    assert!(matches!(err, Error::DuplicateName(_)));
    assert_eq!(store.len(), 1);
}

#[test]
fn read_unknown_id_is_none() {
    let store = RecordStore::new();
    assert!(store.read(RecordId::new(999)).is_none());
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn update_mutates_in_place_and_recomputes_release_date() {
    let mut store = RecordStore::new();
    let id = store.create(draft("Ada Byron")).unwrap();

    let mut next = draft("Ada Byron");
    next.sentence_months = 24;
    next.location = "Block C".to_string();
    store.update(id, next).unwrap();

    let record = store.read(id).unwrap();
    assert_eq!(record.location, "Block C");
    assert_eq!(record.release_date(), date(2026, 3, 1));
    assert_eq!(store.len(), 1);
}

#[test]
fn update_enforces_uniqueness_against_other_records_only() {
    let mut store = RecordStore::new();
    let ada = store.create(draft("Ada Byron")).unwrap();
    store.create(draft("Ben Okri")).unwrap();

    // renaming onto another record's name is refused
    let err = store.update(ada, draft("ben okri")).unwrap_err();
    assert!(matches!(err, Error::DuplicateName(_)));

    // keeping one's own name is fine
    store.update(ada, draft("Ada Byron")).unwrap();
}

#[test]
fn update_unknown_id_is_not_found() {
    let mut store = RecordStore::new();
    let err = store.update(RecordId::new(42), draft("Ghost")).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

// ============================================================================
// Id allocation
// ============================================================================

#[test]
fn ids_are_sequential_and_never_reused() {
    let mut store = RecordStore::new();
    let a = store.create(draft("Ada")).unwrap();
    let b = store.create(draft("Ben")).unwrap();
    assert_eq!((a.value(), b.value()), (101, 102));

    store.delete(b).unwrap();
    store.purge_trash();
    let c = store.create(draft("Cora")).unwrap();
    assert_eq!(c.value(), 103);
}

#[test]
fn next_available_id_is_a_pure_preview() {
    let mut store = RecordStore::new();
    assert_eq!(store.next_available_id().value(), 101);
    assert_eq!(store.next_available_id().value(), 101);

    let id = store.create(draft("Ada")).unwrap();
    assert_eq!(id.value(), 101);
    assert_eq!(store.next_available_id().value(), 102);
}
