use photogallery::error::GalleryError;
use photogallery::gallery::{EditRequest, Gallery};

mod common;
use common::{date, record};

#[test]
fn insert_prepends_new_records() {
    let mut gallery = Gallery::default();
    gallery
        .insert(record(1, "First", "forest", date(2026, 8, 1)))
        .unwrap();
    gallery
        .insert(record(2, "Second", "water", date(2026, 8, 2)))
        .unwrap();
    let ids: Vec<i64> = gallery.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn insert_at_capacity_is_rejected_and_leaves_collection_unchanged() {
    let mut gallery = Gallery::new(
        (0..Gallery::CAPACITY as i64)
            .map(|i| record(i + 1, &format!("Photo {i}"), "forest", date(2026, 8, 1)))
            .collect(),
    );
    assert!(gallery.is_full());

    let before: Vec<i64> = gallery.records().iter().map(|r| r.id).collect();
    let err = gallery
        .insert(record(999, "Overflow", "forest", date(2026, 8, 2)))
        .unwrap_err();
    assert!(matches!(err, GalleryError::CapacityExceeded { capacity } if capacity == 100));

    let after: Vec<i64> = gallery.records().iter().map(|r| r.id).collect();
    assert_eq!(before, after);
}

#[test]
fn delete_removes_exactly_one_record_preserving_order() {
    let mut gallery = Gallery::new(
        (1..=5)
            .map(|i| record(i, &format!("Photo {i}"), "forest", date(2026, 8, 1)))
            .collect(),
    );
    let removed = gallery.delete(3).unwrap();
    assert_eq!(removed.id, 3);
    let ids: Vec<i64> = gallery.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 4, 5]);
}

#[test]
fn delete_unknown_id_fails() {
    let mut gallery = Gallery::new(vec![record(1, "Photo", "forest", date(2026, 8, 1))]);
    let err = gallery.delete(42).unwrap_err();
    assert!(matches!(err, GalleryError::UnknownId(42)));
    assert_eq!(gallery.len(), 1);
}

#[test]
fn clear_removes_everything_and_reports_the_count() {
    let mut gallery = Gallery::new(
        (1..=4)
            .map(|i| record(i, &format!("Photo {i}"), "forest", date(2026, 8, 1)))
            .collect(),
    );
    assert_eq!(gallery.clear(), 4);
    assert!(gallery.is_empty());
}

#[test]
fn edit_applies_accepted_fields_only() {
    let mut gallery = Gallery::new(vec![
        record(1, "Old name", "forest", date(2026, 8, 1)),
        record(2, "Other", "water", date(2026, 8, 2)),
    ]);

    // Declined description keeps its current value.
    let edited = gallery
        .apply_edit(
            1,
            EditRequest {
                name: Some("New name".to_string()),
                description: None,
            },
        )
        .unwrap();
    assert_eq!(edited.name, "New name");
    assert_eq!(edited.description, "");

    let edited = gallery
        .apply_edit(
            1,
            EditRequest {
                name: None,
                description: Some("Fresh description".to_string()),
            },
        )
        .unwrap();
    assert_eq!(edited.name, "New name");
    assert_eq!(edited.description, "Fresh description");

    // Order and the other record are untouched.
    let ids: Vec<i64> = gallery.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(gallery.get(2).unwrap().name, "Other");
}

#[test]
fn categories_are_deduplicated_in_first_seen_order() {
    let gallery = Gallery::new(vec![
        record(1, "A", "forest", date(2026, 8, 3)),
        record(2, "B", "water", date(2026, 8, 2)),
        record(3, "C", "forest", date(2026, 8, 1)),
    ]);
    assert_eq!(gallery.categories(), vec!["forest", "water"]);
}

#[test]
fn remaining_capacity_tracks_the_limit() {
    let mut gallery = Gallery::default();
    assert_eq!(gallery.remaining_capacity(), Gallery::CAPACITY);
    gallery
        .insert(record(1, "Photo", "forest", date(2026, 8, 1)))
        .unwrap();
    assert_eq!(gallery.remaining_capacity(), Gallery::CAPACITY - 1);
}
