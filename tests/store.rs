use std::fs;

use photogallery::store::Store;
use tempfile::tempdir;

mod common;
use common::{date, record};

#[test]
fn missing_file_loads_as_empty_collection() {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path().join("gallery"));
    assert!(store.load().is_empty());
}

#[test]
fn malformed_file_loads_as_empty_collection() {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path().to_path_buf());
    fs::write(store.gallery_file(), "{not json").unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn save_then_load_round_trips_the_collection() {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path().join("gallery"));

    let mut records = vec![
        record(10, "Forest path", "forest", date(2026, 8, 5)),
        record(11, "Lake shore", "water", date(2026, 7, 1)),
    ];
    records[0].description = "Narrow forest trail".to_string();

    store.save(&records).unwrap();
    let loaded = store.load();
    assert_eq!(loaded, records);
}

#[test]
fn every_save_replaces_the_whole_collection() {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path().join("gallery"));

    store
        .save(&[record(1, "One", "forest", date(2026, 8, 1))])
        .unwrap();
    store
        .save(&[record(2, "Two", "water", date(2026, 8, 2))])
        .unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 2);
}

#[test]
fn empty_store_is_seeded_with_demo_records() {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path().join("gallery"));
    let today = date(2026, 8, 7);

    let seeded = store.load_or_seed(today);
    assert_eq!(seeded.len(), 8);

    let mut ids: Vec<i64> = seeded.iter().map(|r| r.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8);

    // Most-recent-first, like every other insertion.
    for pair in seeded.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }

    // The seed is persisted, so the next load sees the same collection.
    assert_eq!(store.load(), seeded);
}

#[test]
fn non_empty_store_is_not_reseeded() {
    let tmp = tempdir().unwrap();
    let store = Store::new(tmp.path().join("gallery"));
    let records = vec![record(42, "Mine", "water", date(2026, 8, 1))];
    store.save(&records).unwrap();

    let loaded = store.load_or_seed(date(2026, 8, 7));
    assert_eq!(loaded, records);
}
