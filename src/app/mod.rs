pub mod exporter;
pub mod grid;
pub mod importer;
pub mod modal;
pub mod thumbs;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use eframe::{egui, App, Frame};
use log::{error, info};

use crate::fs_utils::{expand_dropped, is_supported_image};
use crate::gallery::{EditRequest, Gallery};
use crate::record::{allocate_id, ImageRecord};
use crate::share;
use crate::store::Store;
use crate::ui::KeyboardState;
use crate::view::{CategoryFilter, SortMode, ViewState};

use self::exporter::{ExportRequest, Exporter};
use self::importer::{ImportEvent, Importer};
use self::thumbs::{ThumbLoader, Tier};

/// Category assigned to imported images.
pub const IMPORT_CATEGORY: &str = "uploads";

/// UI interactions collected during a frame and applied afterwards, so the
/// render pass never mutates the collection it is iterating.
#[derive(Debug, Clone)]
pub enum Action {
    OpenViewer(i64),
    CloseViewer,
    ViewerPrev,
    ViewerNext,
    SetFilter(CategoryFilter),
    SetSort(SortMode),
    SearchChanged,
    LoadMore,
    PickFiles,
    ClearAll,
    Delete(i64),
    Download(i64),
    Share(i64),
    BeginEdit(i64),
    ApplyEdit(i64),
    CancelEdit,
}

/// Text buffers backing the viewer's inline edit form.
#[derive(Debug, Clone)]
pub struct EditBuffer {
    pub id: i64,
    pub name: String,
    pub description: String,
}

pub struct GalleryApp {
    pub gallery: Gallery,
    pub view: ViewState,
    pub edit: Option<EditBuffer>,
    pub status: String,
    store: Store,
    thumbs: ThumbLoader,
    importer: Importer,
    exporter: Exporter,
}

impl GalleryApp {
    pub fn new(store: Store) -> Self {
        let records = store.load_or_seed(today());
        let gallery = Gallery::new(records);
        let importer = Importer::new(store.images_dir());
        let status = format!("Ready. {} images in gallery.", gallery.len());
        info!("gallery loaded with {} records", gallery.len());

        Self {
            gallery,
            view: ViewState::default(),
            edit: None,
            status,
            store,
            thumbs: ThumbLoader::new(),
            importer,
            exporter: Exporter::new(),
        }
    }

    /// Serialize the whole collection. Runs after every mutation, before the
    /// next render pass.
    fn persist(&mut self) {
        if let Err(err) = self.store.save(self.gallery.records()) {
            error!("{err}");
            self.status = format!("{err}");
        }
    }

    fn record_source_path(record: &ImageRecord) -> Option<PathBuf> {
        record.is_local().then(|| PathBuf::from(&record.source))
    }

    /// Remove the managed library copy of a deleted record, if any.
    fn remove_library_copy(&self, record: &ImageRecord) {
        let Some(path) = Self::record_source_path(record) else {
            return;
        };
        if path.starts_with(self.store.images_dir()) {
            if let Err(err) = std::fs::remove_file(&path) {
                log::warn!("unable to remove {}: {err}", path.display());
            }
        }
    }

    fn start_import(&mut self, paths: Vec<PathBuf>) {
        let supported: Vec<PathBuf> = paths
            .into_iter()
            .filter(|p| is_supported_image(p))
            .collect();
        if supported.is_empty() {
            self.status = "No supported image files selected".into();
            return;
        }

        let remaining = self.gallery.remaining_capacity();
        if remaining == 0 {
            self.status = format!("Gallery is full ({} images)", Gallery::CAPACITY);
            return;
        }

        let total = supported.len();
        let mut accepted = supported;
        accepted.truncate(remaining);
        if accepted.len() < total {
            self.status = format!(
                "Importing {} of {} files; gallery capacity reached",
                accepted.len(),
                total
            );
        } else {
            self.status = format!("Importing {} files...", accepted.len());
        }
        self.importer.queue_batch(accepted);
        self.view.importing = true;
    }

    fn apply_imported(&mut self, imported: importer::ImportedImage) {
        let record = ImageRecord {
            id: allocate_id(self.gallery.records()),
            name: imported.name,
            source: imported.source.display().to_string(),
            date: today(),
            size: imported.size,
            resolution: imported.resolution,
            description: String::new(),
            category: IMPORT_CATEGORY.to_string(),
        };
        let source = PathBuf::from(&record.source);
        match self.gallery.insert(record) {
            Ok(()) => {
                // Viewer indexes shift when a record is prepended.
                if let Some(idx) = self.view.modal {
                    self.view.modal = Some(idx + 1);
                }
                self.persist();
            }
            Err(err) => {
                // The batch was capped when queued, but the collection may
                // have grown since. Drop the orphaned library copy.
                if let Err(remove_err) = std::fs::remove_file(&source) {
                    log::warn!("unable to remove {}: {remove_err}", source.display());
                }
                self.status = format!("{err}");
            }
        }
    }

    fn drain_import_events(&mut self) {
        for event in self.importer.drain() {
            match event {
                ImportEvent::FileDone { result, .. } => match result {
                    Ok(imported) => self.apply_imported(imported),
                    Err(err) => self.status = format!("{err}"),
                },
                ImportEvent::BatchDone { imported, total } => {
                    self.status = format!("Imported {imported} of {total} images");
                }
            }
        }
        self.view.importing = self.importer.is_active();
    }

    fn drain_export_completions(&mut self) {
        for status in self.exporter.check_completions() {
            match status.result {
                Ok(()) => {
                    self.status = format!("Saved {}", status.destination.display());
                }
                Err(err) => {
                    error!("export failed: {err:#}");
                    self.status = format!("{err:#}");
                }
            }
        }
    }

    fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.start_import(expand_dropped(&dropped));
        }
    }

    /// Viewer shortcuts. Only sampled while the viewer is open.
    fn handle_keyboard(ctx: &egui::Context) -> KeyboardState {
        ctx.input(|input| KeyboardState {
            close_viewer: input.key_pressed(egui::Key::Escape),
            prev_image: input.key_pressed(egui::Key::ArrowLeft),
            next_image: input.key_pressed(egui::Key::ArrowRight),
        })
    }

    fn pick_files(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Select images to import")
            .add_filter("Images", crate::fs_utils::SUPPORTED_EXTENSIONS)
            .pick_files();
        if let Some(paths) = picked {
            self.start_import(paths);
        }
    }

    fn download(&mut self, id: i64) {
        let Some(record) = self.gallery.get(id) else {
            return;
        };
        let Some(source) = Self::record_source_path(record) else {
            self.status = format!("{} has no local image to save", record.name);
            return;
        };
        let default_name = source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| format!("{}.png", record.name));
        let picked = rfd::FileDialog::new()
            .set_title("Save image as")
            .set_file_name(default_name)
            .save_file();
        if let Some(destination) = picked {
            self.status = format!("Saving {}...", destination.display());
            self.exporter
                .queue_export(ExportRequest { source, destination });
        }
    }

    fn delete(&mut self, id: i64) {
        match self.gallery.delete(id) {
            Ok(removed) => {
                if let Some(path) = Self::record_source_path(&removed) {
                    self.thumbs.forget(&path);
                }
                self.remove_library_copy(&removed);
                if self.edit.as_ref().is_some_and(|e| e.id == id) {
                    self.edit = None;
                }
                self.view.clamp_modal(self.gallery.len());
                self.persist();
                self.status = format!("Deleted {}", removed.name);
            }
            Err(err) => self.status = format!("{err}"),
        }
    }

    fn clear_all(&mut self) {
        for record in self.gallery.records().to_vec() {
            self.remove_library_copy(&record);
        }
        let removed = self.gallery.clear();
        self.thumbs.clear();
        self.edit = None;
        self.view.modal = None;
        self.view.reset_pages();
        self.persist();
        self.status = format!("Removed {removed} images");
    }

    fn share(&mut self, id: i64) {
        let Some(record) = self.gallery.get(id) else {
            return;
        };
        let name = record.name.clone();
        match share::share_record(record) {
            Ok(method) => self.status = method.message(&name),
            Err(err) => self.status = format!("{err}"),
        }
    }

    fn begin_edit(&mut self, id: i64) {
        if let Some(record) = self.gallery.get(id) {
            self.edit = Some(EditBuffer {
                id,
                name: record.name.clone(),
                description: record.description.clone(),
            });
        }
    }

    fn apply_edit(&mut self, id: i64) {
        let Some(buffer) = self.edit.take() else {
            return;
        };
        let request = EditRequest {
            name: Some(buffer.name),
            description: Some(buffer.description),
        };
        match self.gallery.apply_edit(id, request) {
            Ok(record) => {
                self.status = format!("Updated {}", record.name);
                self.persist();
            }
            Err(err) => self.status = format!("{err}"),
        }
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::OpenViewer(id) => {
                if let Some(idx) = self.gallery.position(id) {
                    self.view.modal = Some(idx);
                    self.edit = None;
                }
            }
            Action::CloseViewer => {
                self.view.modal = None;
                self.edit = None;
            }
            Action::ViewerPrev => {
                self.view.modal_prev();
                self.edit = None;
            }
            Action::ViewerNext => {
                self.view.modal_next(self.gallery.len());
                self.edit = None;
            }
            Action::SetFilter(filter) => {
                self.view.filter = filter;
                self.view.reset_pages();
            }
            Action::SetSort(sort) => {
                self.view.sort = sort;
                self.view.reset_pages();
            }
            Action::SearchChanged => self.view.reset_pages(),
            Action::LoadMore => self.view.load_more(),
            Action::PickFiles => self.pick_files(),
            Action::ClearAll => self.clear_all(),
            Action::Delete(id) => self.delete(id),
            Action::Download(id) => self.download(id),
            Action::Share(id) => self.share(id),
            Action::BeginEdit(id) => self.begin_edit(id),
            Action::ApplyEdit(id) => self.apply_edit(id),
            Action::CancelEdit => self.edit = None,
        }
    }

    pub(crate) fn import_progress(&self) -> f32 {
        self.importer.progress_ratio()
    }

    pub(crate) fn request_thumb(&mut self, record: &ImageRecord, tier: Tier) {
        if let Some(path) = Self::record_source_path(record) {
            self.thumbs.request(&path, tier);
        }
    }

    pub(crate) fn texture_for(
        &self,
        record: &ImageRecord,
        tier: Tier,
    ) -> Option<&egui::TextureHandle> {
        let path = Self::record_source_path(record)?;
        match tier {
            Tier::Thumb => self.thumbs.thumb(&path),
            Tier::Viewer => self.thumbs.viewer(&path),
        }
    }

    pub(crate) fn thumb_failed(&self, record: &ImageRecord) -> bool {
        Self::record_source_path(record)
            .map(|path| self.thumbs.is_failed(&path))
            .unwrap_or(false)
    }
}

impl App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        let _ = frame;

        self.thumbs.drain(ctx);
        self.drain_import_events();
        self.drain_export_completions();
        self.handle_drag_and_drop(ctx);

        let mut actions: Vec<Action> = Vec::new();

        // Shortcuts stay inert while a text field has focus.
        let typing = ctx.wants_keyboard_input();
        if self.view.modal.is_some() && !typing {
            let keys = Self::handle_keyboard(ctx);
            if keys.close_viewer {
                actions.push(Action::CloseViewer);
            }
            if keys.prev_image {
                actions.push(Action::ViewerPrev);
            }
            if keys.next_image {
                actions.push(Action::ViewerNext);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            grid::show(self, ui, &mut actions);
        });

        if self.view.modal.is_some() {
            modal::show(self, ctx, &mut actions);
        }

        for action in actions {
            self.apply_action(action);
        }

        if self.view.importing || self.thumbs.has_pending() || !self.exporter.pending.is_empty() {
            ctx.request_repaint();
        }
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
