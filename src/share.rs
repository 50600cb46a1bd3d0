use std::path::Path;

use log::debug;

use crate::error::GalleryError;
use crate::record::ImageRecord;

/// How a record ended up being shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareMethod {
    /// Handed to the platform's file handler.
    Opened,
    /// Source copied to the system clipboard.
    Clipboard,
}

impl ShareMethod {
    pub fn message(&self, record_name: &str) -> String {
        match self {
            ShareMethod::Opened => format!("Opened {record_name} in the system viewer"),
            ShareMethod::Clipboard => format!("Copied source of {record_name} to the clipboard"),
        }
    }
}

/// Share a record: hand local images to the platform handler, otherwise copy
/// the source to the clipboard. Fire-and-forget from the caller's point of
/// view; the outcome only feeds the status line.
pub fn share_record(record: &ImageRecord) -> Result<ShareMethod, GalleryError> {
    if record.is_local() && Path::new(&record.source).exists() {
        match open::that(&record.source) {
            Ok(()) => return Ok(ShareMethod::Opened),
            Err(err) => {
                debug!("platform handler rejected {}: {err}", record.source);
                // Fall through to the clipboard.
            }
        }
    }

    let mut clipboard =
        arboard::Clipboard::new().map_err(|err| GalleryError::Share(err.to_string()))?;
    clipboard
        .set_text(record.source.clone())
        .map_err(|err| GalleryError::Share(err.to_string()))?;
    Ok(ShareMethod::Clipboard)
}
