//! End-to-end pass over a seeded session

use crate::common::*;
use custodia::{Custodia, RecordForm, RecordId, SortKey, SortOrder};

#[test]
fn seeded_session_supports_the_full_workflow() {
    init_tracing();
    let sessions = Custodia::seeded().unwrap();

    // five intake records under ids 101..=105
    let ids: Vec<u64> = sessions.list().iter().map(|r| r.id().value()).collect();
    assert_eq!(ids, vec![101, 102, 103, 104, 105]);

    // alphabetical roster
    let roster = sessions.sorted(SortKey::Name, SortOrder::Ascending);
    let names: Vec<String> = roster.iter().map(|r| r.name.clone()).collect();
    let mut expected = names.clone();
    expected.sort();
    assert_eq!(names, expected);

    // exact lookup after the id-sorted snapshot
    let found = sessions.search_by_id(RecordId::new(103)).unwrap();
    assert_eq!(found.id().value(), 103);

    // two deletions, then one restore brings back the later deletion's
    // predecessor — last in, first out
    sessions.delete(RecordId::new(103)).unwrap();
    sessions.delete(RecordId::new(101)).unwrap();
    let restored = sessions.restore().unwrap();
    assert_eq!(restored.id().value(), 101);

    // 103 is still in the trash, not live
    assert!(sessions.read(RecordId::new(103)).is_none());
    let trashed: Vec<u64> = sessions.trash_view().iter().map(|r| r.id().value()).collect();
    assert_eq!(trashed, vec![103]);

    // a new admission takes the next id, never a trashed one
    let id = sessions.create(draft("Nora Quist")).unwrap();
    assert_eq!(id.value(), 106);

    // the feed reflects the admission immediately
    let newest = &sessions.recent_activity()[0];
    assert_eq!(newest.id(), id);
}

#[test]
fn presentation_input_flows_through_the_form() {
    let sessions = Custodia::new();

    let form = RecordForm {
        name: "Iris Wolfe".to_string(),
        age: "41".to_string(),
        gender: "F".to_string(),
        address: "12 Quay Street".to_string(),
        crime_type: "Smuggling".to_string(),
        crime_description: "Contraband electronics".to_string(),
        admission_date: "2024-09-14".to_string(),
        sentence_months: "30".to_string(),
        location: "Block B".to_string(),
        status: "active".to_string(),
        health_status: String::new(),
        family_access_code: "WOLFE881".to_string(),
        photo_ref: String::new(),
    };

    let draft = form.parse(date(2025, 1, 1)).unwrap();
    let id = sessions.create(draft).unwrap();

    let record = sessions.family_view("WOLFE881").unwrap();
    assert_eq!(record.id(), id);
    assert_eq!(record.release_date(), date(2027, 3, 14));
}

#[test]
fn malformed_form_input_never_reaches_the_store() {
    let sessions = Custodia::new();

    let form = RecordForm {
        name: "Iris Wolfe".to_string(),
        age: "forty-one".to_string(),
        gender: "F".to_string(),
        crime_type: "Smuggling".to_string(),
        admission_date: "14/09/2024".to_string(),
        sentence_months: "30".to_string(),
        location: "Block B".to_string(),
        ..RecordForm::default()
    };

    let violations = form.parse(date(2025, 1, 1)).unwrap_err();
    assert_eq!(violations.len(), 2);
    assert!(sessions.is_empty());
}
