use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single image in the gallery.
///
/// `source` is either a path inside the managed library directory or a remote
/// URL (demo seeds only). Remote sources are never fetched; they render as
/// placeholder cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Unique id, derived from the creation timestamp in milliseconds.
    pub id: i64,
    pub name: String,
    pub source: String,
    pub date: NaiveDate,
    /// Human-readable file size, e.g. "2.4 MB".
    pub size: String,
    /// Pixel dimensions as "WxH".
    pub resolution: String,
    pub description: String,
    pub category: String,
}

impl ImageRecord {
    pub fn is_local(&self) -> bool {
        !(self.source.starts_with("http://") || self.source.starts_with("https://"))
    }
}

/// Allocate an id for a new record: the current timestamp in milliseconds,
/// bumped past the maximum existing id so concurrent-frame imports stay unique.
pub fn allocate_id(existing: &[ImageRecord]) -> i64 {
    let now = Local::now().timestamp_millis();
    let max = existing.iter().map(|r| r.id).max().unwrap_or(0);
    now.max(max + 1)
}

/// Format a byte count with binary (1024-based) unit scaling.
pub fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.1} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.1} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.1} KB", size as f64 / KB as f64)
    } else {
        format!("{} B", size)
    }
}

/// Demo records installed when the store is empty on first launch.
pub fn demo_records(today: NaiveDate) -> Vec<ImageRecord> {
    let seed: [(&str, &str, &str, &str); 8] = [
        (
            "Forest path",
            "forest",
            "https://images.unsplash.com/photo-1448375240586-882707db888b?w=800",
            "Narrow forest trail in spring",
        ),
        (
            "White stork",
            "birds",
            "https://images.unsplash.com/photo-1551085254-e96b210db58a?w=800",
            "Stork perched on an old tree",
        ),
        (
            "Oak",
            "trees",
            "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=800",
            "Lone oak at dawn",
        ),
        (
            "City nature",
            "forest",
            "https://images.unsplash.com/photo-1518837695005-2083093ee35b?w=800",
            "Green park in the city",
        ),
        (
            "Lake shore",
            "water",
            "https://images.unsplash.com/photo-1505142468610-359e7d316be0?w=800",
            "Quiet lake in autumn",
        ),
        (
            "Butterfly",
            "birds",
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800",
            "Butterfly on a blossom",
        ),
        (
            "Fog in the forest",
            "forest",
            "https://images.unsplash.com/photo-1418065460487-3e41a6c84dc5?w=800",
            "Morning fog in a conifer forest",
        ),
        (
            "River bend",
            "water",
            "https://images.unsplash.com/photo-1470114716159-e389f8712fda?w=800",
            "River winding through the woods",
        ),
    ];

    seed.iter()
        .enumerate()
        .map(|(i, (name, category, source, description))| ImageRecord {
            // Fixed ids well below any timestamp-derived one.
            id: (i + 1) as i64,
            name: (*name).to_string(),
            source: (*source).to_string(),
            // Spread the seed over the last weeks so the date filter and
            // newest sort have something to bite on.
            date: today - chrono::Duration::days((i * 3) as i64),
            size: format_size(780 * 1024 + (i as u64) * 65 * 1024),
            resolution: "800x533".to_string(),
            description: (*description).to_string(),
            category: (*category).to_string(),
        })
        .collect()
}
