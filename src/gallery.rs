use crate::error::GalleryError;
use crate::record::ImageRecord;

/// Requested field replacements for an edit. `None` means the user declined
/// that field, which leaves it unchanged.
#[derive(Debug, Clone, Default)]
pub struct EditRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// The owned image collection. Most-recent-first: new records are prepended.
///
/// The gallery itself is persistence- and UI-agnostic; the application
/// serializes it wholesale after every mutation.
#[derive(Debug, Default)]
pub struct Gallery {
    records: Vec<ImageRecord>,
}

impl Gallery {
    pub const CAPACITY: usize = 100;

    pub fn new(records: Vec<ImageRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= Self::CAPACITY
    }

    pub fn remaining_capacity(&self) -> usize {
        Self::CAPACITY.saturating_sub(self.records.len())
    }

    pub fn get(&self, id: i64) -> Option<&ImageRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn position(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Categories present in the collection, deduplicated, in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for record in &self.records {
            if !out.iter().any(|c| c == &record.category) {
                out.push(record.category.clone());
            }
        }
        out
    }

    /// Prepend a new record. Fails without modifying the collection when the
    /// capacity is reached.
    pub fn insert(&mut self, record: ImageRecord) -> Result<(), GalleryError> {
        if self.is_full() {
            return Err(GalleryError::CapacityExceeded {
                capacity: Self::CAPACITY,
            });
        }
        self.records.insert(0, record);
        Ok(())
    }

    /// Remove the record with the given id, returning it. The relative order
    /// of the remaining records is unchanged.
    pub fn delete(&mut self, id: i64) -> Result<ImageRecord, GalleryError> {
        let idx = self.position(id).ok_or(GalleryError::UnknownId(id))?;
        Ok(self.records.remove(idx))
    }

    /// Remove every record, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        count
    }

    /// Apply an edit to the record with the given id. Declined fields
    /// (`None`) keep their current value.
    pub fn apply_edit(&mut self, id: i64, edit: EditRequest) -> Result<&ImageRecord, GalleryError> {
        let idx = self.position(id).ok_or(GalleryError::UnknownId(id))?;
        let record = &mut self.records[idx];
        if let Some(name) = edit.name {
            record.name = name;
        }
        if let Some(description) = edit.description {
            record.description = description;
        }
        Ok(&self.records[idx])
    }
}
