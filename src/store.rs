use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{info, warn};

use crate::error::GalleryError;
use crate::record::{self, ImageRecord};

const GALLERY_FILE: &str = "gallery.json";
const IMAGES_DIR: &str = "images";

/// Wholesale JSON persistence of the record collection.
///
/// The entire collection is the unit of persistence: every mutation
/// re-serializes the full array into a single file. A missing or unreadable
/// file loads as an empty collection; it is never an error.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The default store location in the user's data directory, e.g.
    /// `~/.local/share/photogallery` on Linux.
    pub fn default_root() -> PathBuf {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("photogallery")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn gallery_file(&self) -> PathBuf {
        self.root.join(GALLERY_FILE)
    }

    /// Directory holding the managed copies of imported images.
    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    /// Load the persisted collection. Absence or a parse failure yields an
    /// empty collection; the failure is logged, not surfaced.
    pub fn load(&self) -> Vec<ImageRecord> {
        let path = self.gallery_file();
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!("unable to read {}: {err}", path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(records) => records,
            Err(err) => {
                warn!("malformed gallery file {}: {err}", path.display());
                Vec::new()
            }
        }
    }

    /// Load the collection, installing the demo seed when the store is empty.
    pub fn load_or_seed(&self, today: NaiveDate) -> Vec<ImageRecord> {
        let records = self.load();
        if !records.is_empty() {
            return records;
        }
        let seeded = record::demo_records(today);
        info!("empty store, seeding {} demo records", seeded.len());
        if let Err(err) = self.save(&seeded) {
            warn!("unable to persist demo seed: {err}");
        }
        seeded
    }

    /// Serialize and write the entire collection.
    pub fn save(&self, records: &[ImageRecord]) -> Result<(), GalleryError> {
        fs::create_dir_all(&self.root)
            .map_err(|err| GalleryError::Storage(format!("create {}: {err}", self.root.display())))?;
        let json = serde_json::to_string_pretty(records)
            .map_err(|err| GalleryError::Storage(err.to_string()))?;
        let path = self.gallery_file();
        fs::write(&path, json)
            .map_err(|err| GalleryError::Storage(format!("write {}: {err}", path.display())))?;
        Ok(())
    }
}
