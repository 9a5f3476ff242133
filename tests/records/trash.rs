//! Trash stack semantics: soft delete, restore, purge, overflow

use crate::common::*;
use custodia::{Error, RecordStore};

#[test]
fn delete_then_restore_round_trips_the_same_record() {
    let mut store = RecordStore::new();
    let id = store.create(draft("Ada Byron")).unwrap();
    let before = store.read(id).unwrap().clone();

    let deleted = store.delete(id).unwrap();
    assert_eq!(deleted, before);
    assert!(store.read(id).is_none());
    assert_eq!(store.trash_len(), 1);

    let restored = store.restore().unwrap();
    assert_eq!(restored, before);
    assert_eq!(store.trash_len(), 0);

    // present in the live collection exactly once
    let count = store
        .records()
        .iter()
        .filter(|r| r.id() == id)
        .count();
    assert_eq!(count, 1);
}

#[test]
fn restore_follows_last_in_first_out() {
    let mut store = RecordStore::new();
    let a = store.create(draft("Ada")).unwrap();
    let b = store.create(draft("Ben")).unwrap();

    store.delete(a).unwrap();
    store.delete(b).unwrap();

    assert_eq!(store.restore().unwrap().id(), b);
    assert_eq!(store.restore().unwrap().id(), a);
}

#[test]
fn restore_on_empty_trash_is_an_underflow() {
    let mut store = RecordStore::new();
    let id = store.create(draft("Ada")).unwrap();

    let err = store.restore().unwrap_err();
    assert!(matches!(err, Error::TrashEmpty));
    // nothing moved
    assert_eq!(store.len(), 1);
    assert!(store.read(id).is_some());
}

#[test]
fn sixth_delete_overflows_without_partial_application() {
    init_tracing();
    let mut store = RecordStore::new();
    let names = ["Ada", "Ben", "Cora", "Dev", "Elif", "Finn"];
    let ids: Vec<_> = names
        .iter()
        .map(|n| store.create(draft(n)).unwrap())
        .collect();

    for &id in &ids[..5] {
        store.delete(id).unwrap();
    }
    assert_eq!(store.trash_len(), 5);

    let err = store.delete(ids[5]).unwrap_err();
    assert!(matches!(err, Error::TrashFull { capacity: 5 }));

    // the sixth record is still live; the trash is untouched
    assert!(store.read(ids[5]).is_some());
    assert_eq!(store.len(), 1);
    assert_eq!(store.trash_len(), 5);
}

#[test]
fn purge_empties_the_trash_for_good() {
    let mut store = RecordStore::new();
    let a = store.create(draft("Ada")).unwrap();
    store.delete(a).unwrap();

    assert_eq!(store.purge_trash(), 1);
    assert_eq!(store.trash_len(), 0);
    assert!(matches!(store.restore(), Err(Error::TrashEmpty)));
    // purging again is a harmless no-op
    assert_eq!(store.purge_trash(), 0);
}

#[test]
fn trash_view_lists_most_recent_deletion_first() {
    let mut store = RecordStore::new();
    let a = store.create(draft("Ada")).unwrap();
    let b = store.create(draft("Ben")).unwrap();
    let c = store.create(draft("Cora")).unwrap();

    store.delete(a).unwrap();
    store.delete(b).unwrap();
    store.delete(c).unwrap();

    let view: Vec<_> = store.trash_view().iter().map(|r| r.id()).collect();
    assert_eq!(view, vec![c, b, a]);
}

#[test]
fn deleted_record_is_in_exactly_one_place() {
    let mut store = RecordStore::new();
    let id = store.create(draft("Ada")).unwrap();
    store.delete(id).unwrap();

    assert!(store.read(id).is_none());
    assert!(store.trash_view().iter().any(|r| r.id() == id));

    store.restore().unwrap();
    assert!(store.read(id).is_some());
    assert!(!store.trash_view().iter().any(|r| r.id() == id));
}
