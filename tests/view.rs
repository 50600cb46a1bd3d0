use photogallery::record::ImageRecord;
use photogallery::view::{
    visible_records, CategoryFilter, SortMode, ViewState, PAGE_SIZE, RECENT_DAYS,
};

mod common;
use common::{date, record};

fn sample_gallery() -> Vec<ImageRecord> {
    vec![
        record(1, "Forest path", "forest", date(2026, 8, 5)),
        record(2, "White stork", "birds", date(2026, 8, 3)),
        record(3, "Oak", "trees", date(2026, 7, 20)),
        record(4, "Lake shore", "water", date(2026, 7, 1)),
        record(5, "apple orchard", "trees", date(2026, 8, 4)),
    ]
}

fn ids(records: &[&ImageRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn all_filter_with_empty_search_returns_everything() {
    let gallery = sample_gallery();
    let today = date(2026, 8, 7);
    for sort in SortMode::ALL {
        let view = ViewState {
            sort,
            ..ViewState::default()
        };
        let set = visible_records(&gallery, &view, today);
        assert_eq!(set.records.len(), gallery.len());
        assert_eq!(set.total_matching, gallery.len());
        assert!(!set.has_more);
    }
}

#[test]
fn newest_sort_is_non_increasing_and_stable() {
    let mut gallery = sample_gallery();
    // Two records share a date; the earlier collection entry must stay first.
    gallery.push(record(6, "Second stork", "birds", date(2026, 8, 3)));
    let view = ViewState::default();
    let set = visible_records(&gallery, &view, date(2026, 8, 7));

    for pair in set.records.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }
    let pos_first = set.records.iter().position(|r| r.id == 2).unwrap();
    let pos_second = set.records.iter().position(|r| r.id == 6).unwrap();
    assert!(pos_first < pos_second);
}

#[test]
fn name_sort_is_case_insensitive_ascending() {
    let gallery = sample_gallery();
    let view = ViewState {
        sort: SortMode::Name,
        ..ViewState::default()
    };
    let set = visible_records(&gallery, &view, date(2026, 8, 7));
    let names: Vec<String> = set.records.iter().map(|r| r.name.to_lowercase()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    // "apple orchard" sorts before "Forest path" despite the lowercase start.
    assert_eq!(set.records[0].id, 5);
}

#[test]
fn random_sort_preserves_the_record_multiset() {
    let gallery = sample_gallery();
    let view = ViewState {
        sort: SortMode::Random,
        ..ViewState::default()
    };
    let set = visible_records(&gallery, &view, date(2026, 8, 7));
    let mut shuffled = ids(&set.records);
    shuffled.sort();
    assert_eq!(shuffled, vec![1, 2, 3, 4, 5]);
}

#[test]
fn recent_filter_keeps_strictly_newer_than_cutoff() {
    let today = date(2026, 8, 7);
    let cutoff = today - chrono::Duration::days(RECENT_DAYS);
    let mut gallery = sample_gallery();
    // Exactly on the cutoff: must be excluded.
    gallery.push(record(7, "Cutoff", "forest", cutoff));
    let view = ViewState {
        filter: CategoryFilter::Recent,
        ..ViewState::default()
    };
    let set = visible_records(&gallery, &view, today);
    assert_eq!(ids(&set.records), vec![1, 5, 2]);
    assert!(set.records.iter().all(|r| r.date > cutoff));
}

#[test]
fn category_filter_matches_exactly() {
    let gallery = sample_gallery();
    let view = ViewState {
        filter: CategoryFilter::Category("trees".to_string()),
        ..ViewState::default()
    };
    let set = visible_records(&gallery, &view, date(2026, 8, 7));
    let mut found = ids(&set.records);
    found.sort();
    assert_eq!(found, vec![3, 5]);
}

#[test]
fn search_matches_name_or_description_case_insensitively() {
    let mut gallery = sample_gallery();
    gallery[3].description = "A quiet LAKE in autumn".to_string();
    let view = ViewState {
        search: "lake".to_string(),
        ..ViewState::default()
    };
    let set = visible_records(&gallery, &view, date(2026, 8, 7));
    // Record 4 matches both name and description, but appears once.
    assert_eq!(ids(&set.records), vec![4]);
}

#[test]
fn pagination_accumulates_additively() {
    let today = date(2026, 8, 7);
    let gallery: Vec<ImageRecord> = (0..25)
        .map(|i| {
            record(
                i + 1,
                &format!("Photo {i:02}"),
                "forest",
                today - chrono::Duration::days(i),
            )
        })
        .collect();

    let mut view = ViewState::default();
    let first = visible_records(&gallery, &view, today);
    assert_eq!(first.records.len(), PAGE_SIZE);
    assert!(first.has_more);
    for pair in first.records.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }

    view.load_more();
    let second = visible_records(&gallery, &view, today);
    assert_eq!(second.records.len(), 25);
    assert!(!second.has_more);
}

#[test]
fn changing_filters_resets_the_window() {
    let mut view = ViewState::default();
    view.load_more();
    view.load_more();
    assert_eq!(view.visible_limit(), 3 * PAGE_SIZE);
    view.reset_pages();
    assert_eq!(view.visible_limit(), PAGE_SIZE);
}

#[test]
fn modal_navigation_clamps_at_both_ends() {
    let mut view = ViewState {
        modal: Some(0),
        ..ViewState::default()
    };
    let len = 3;

    assert!(!view.modal_can_prev());
    view.modal_prev();
    assert_eq!(view.modal, Some(0));

    view.modal_next(len);
    view.modal_next(len);
    assert_eq!(view.modal, Some(2));
    assert!(!view.modal_can_next(len));
    view.modal_next(len);
    assert_eq!(view.modal, Some(2));
}

#[test]
fn modal_index_survives_shrinking_collections() {
    let mut view = ViewState {
        modal: Some(4),
        ..ViewState::default()
    };
    view.clamp_modal(3);
    assert_eq!(view.modal, Some(2));
    view.clamp_modal(0);
    assert_eq!(view.modal, None);
}
