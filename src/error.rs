use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while mutating or persisting the gallery.
/// None of these are fatal; the application surfaces them on the status line.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("gallery is full ({capacity} images)")]
    CapacityExceeded { capacity: usize },

    #[error("{} is too large ({size} bytes, limit {limit})", .path.display())]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("failed to decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to store gallery: {0}")]
    Storage(String),

    #[error("failed to share image: {0}")]
    Share(String),

    #[error("no image with id {0}")]
    UnknownId(i64),
}
