use std::{
    fs,
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use log::warn;

use crate::error::GalleryError;
use crate::fs_utils::{copy_into_library, default_record_name};
use crate::image_utils::{decode_bytes, resolution_string};
use crate::record::format_size;

/// Hard per-file size limit for imports.
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Pause between files so the progress bar is readable on fast disks.
const PACING_DELAY: Duration = Duration::from_millis(120);

/// Metadata of a successfully imported file, ready to become a record.
#[derive(Debug, Clone)]
pub struct ImportedImage {
    /// Path of the managed copy inside the library directory.
    pub source: PathBuf,
    /// Default name: original file name with the extension stripped.
    pub name: String,
    pub size: String,
    pub resolution: String,
}

#[derive(Debug)]
pub enum ImportEvent {
    /// One file of the batch finished, successfully or not.
    FileDone {
        done: usize,
        total: usize,
        result: Result<ImportedImage, GalleryError>,
    },
    /// The whole batch finished.
    BatchDone { imported: usize, total: usize },
}

/// Background import worker. Batches are processed strictly sequentially,
/// one file at a time; a failing file is reported and skipped, never aborting
/// the rest of the batch. In-flight batches cannot be cancelled.
pub struct Importer {
    batch_tx: Sender<Vec<PathBuf>>,
    event_rx: Receiver<ImportEvent>,
    /// Progress of the running batch as (done, total).
    pub progress: Option<(usize, usize)>,
}

impl Importer {
    pub fn new(library_dir: PathBuf) -> Self {
        let (batch_tx, batch_rx) = mpsc::channel::<Vec<PathBuf>>();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(batch) = batch_rx.recv() {
                let total = batch.len();
                let mut imported = 0;
                for (idx, path) in batch.into_iter().enumerate() {
                    let result = process_file(&path, &library_dir);
                    match &result {
                        Ok(_) => imported += 1,
                        Err(err) => warn!("skipping {}: {err}", path.display()),
                    }
                    thread::sleep(PACING_DELAY);
                    if event_tx
                        .send(ImportEvent::FileDone {
                            done: idx + 1,
                            total,
                            result,
                        })
                        .is_err()
                    {
                        return;
                    }
                }
                if event_tx
                    .send(ImportEvent::BatchDone { imported, total })
                    .is_err()
                {
                    return;
                }
            }
        });

        Self {
            batch_tx,
            event_rx,
            progress: None,
        }
    }

    pub fn queue_batch(&mut self, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }
        self.progress = Some((0, paths.len()));
        let _ = self.batch_tx.send(paths);
    }

    pub fn is_active(&self) -> bool {
        self.progress.is_some()
    }

    /// Fraction of the running batch that is done, for the progress bar.
    pub fn progress_ratio(&self) -> f32 {
        match self.progress {
            Some((done, total)) if total > 0 => done as f32 / total as f32,
            _ => 0.0,
        }
    }

    /// Drain pending events, updating the progress counter.
    pub fn drain(&mut self) -> Vec<ImportEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            match &event {
                ImportEvent::FileDone { done, total, .. } => {
                    self.progress = Some((*done, *total));
                }
                ImportEvent::BatchDone { .. } => {
                    self.progress = None;
                }
            }
            events.push(event);
        }
        events
    }
}

/// Import one file: size gate, read, decode, copy into the library.
pub fn process_file(path: &Path, library_dir: &Path) -> Result<ImportedImage, GalleryError> {
    let meta = fs::metadata(path).map_err(|source| GalleryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if meta.len() > MAX_FILE_BYTES {
        return Err(GalleryError::FileTooLarge {
            path: path.to_path_buf(),
            size: meta.len(),
            limit: MAX_FILE_BYTES,
        });
    }

    let bytes = fs::read(path).map_err(|source| GalleryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode_bytes(path, &bytes).map_err(|err| GalleryError::Decode {
        path: path.to_path_buf(),
        reason: format!("{err}"),
    })?;

    let copy = copy_into_library(path, library_dir)
        .map_err(|err| GalleryError::Storage(format!("{err:#}")))?;

    Ok(ImportedImage {
        name: default_record_name(path),
        size: format_size(meta.len()),
        resolution: resolution_string(&image),
        source: copy,
    })
}
