use eframe::egui::{self, Align2, Color32, FontId, RichText};

use crate::record::ImageRecord;
use crate::ui::ImageMetrics;

use super::{Action, GalleryApp, Tier};

const VIEWER_AREA: egui::Vec2 = egui::Vec2::new(600.0, 380.0);

/// Detail viewer over the *unfiltered* collection. Previous/next clamp at
/// the collection boundaries; escape/left/right are handled by the app while
/// the viewer is open.
pub fn show(app: &mut GalleryApp, ctx: &egui::Context, actions: &mut Vec<Action>) {
    let Some(idx) = app.view.modal else {
        return;
    };
    let Some(record) = app.gallery.records().get(idx).cloned() else {
        actions.push(Action::CloseViewer);
        return;
    };
    app.request_thumb(&record, Tier::Viewer);

    let len = app.gallery.len();
    let mut open = true;
    egui::Window::new("Image details")
        .id(egui::Id::new("detail-viewer"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .open(&mut open)
        .show(ctx, |ui| {
            image_area(app, ui, &record);

            ui.horizontal(|ui| {
                let prev = ui.add_enabled(
                    app.view.modal_can_prev(),
                    egui::Button::new("< Previous"),
                );
                if prev.clicked() {
                    actions.push(Action::ViewerPrev);
                }
                let next = ui.add_enabled(
                    app.view.modal_can_next(len),
                    egui::Button::new("Next >"),
                );
                if next.clicked() {
                    actions.push(Action::ViewerNext);
                }
                ui.label(RichText::new(format!("{} of {}", idx + 1, len)).weak());
            });

            ui.separator();
            details(app, ui, &record, actions);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Share").clicked() {
                    actions.push(Action::Share(record.id));
                }
                if ui.button("Save as...").clicked() {
                    actions.push(Action::Download(record.id));
                }
                if ui.button("Delete").clicked() {
                    actions.push(Action::Delete(record.id));
                }
            });
        });

    if !open {
        actions.push(Action::CloseViewer);
    }
}

fn image_area(app: &GalleryApp, ui: &mut egui::Ui, record: &ImageRecord) {
    // Take the texture id up front so the borrow does not outlive this call.
    let texture = app
        .texture_for(record, Tier::Viewer)
        .or_else(|| app.texture_for(record, Tier::Thumb))
        .map(|t| (t.id(), t.size_vec2()));

    let (rect, _) = ui.allocate_exact_size(VIEWER_AREA, egui::Sense::hover());
    ui.painter().rect_filled(rect, 4.0, Color32::BLACK);

    match texture {
        Some((id, size)) => {
            let metrics = ImageMetrics::new(rect, size);
            ui.painter().image(
                id,
                metrics.image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        None => {
            let caption = if !record.is_local() {
                "Remote image (not fetched)"
            } else if app.thumb_failed(record) {
                "No preview available"
            } else {
                "Loading..."
            };
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                caption,
                FontId::proportional(16.0),
                Color32::GRAY,
            );
        }
    }
}

fn details(app: &mut GalleryApp, ui: &mut egui::Ui, record: &ImageRecord, actions: &mut Vec<Action>) {
    let editing = app.edit.as_ref().is_some_and(|e| e.id == record.id);

    if editing {
        if let Some(edit) = app.edit.as_mut() {
            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut edit.name);
            });
            ui.horizontal(|ui| {
                ui.label("Description:");
                ui.text_edit_singleline(&mut edit.description);
            });
            ui.horizontal(|ui| {
                if ui.button("Apply").clicked() {
                    actions.push(Action::ApplyEdit(record.id));
                }
                if ui.button("Cancel").clicked() {
                    actions.push(Action::CancelEdit);
                }
            });
        }
    } else {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&record.name).strong().size(16.0));
            if ui.small_button("Edit").clicked() {
                actions.push(Action::BeginEdit(record.id));
            }
        });
        if !record.description.is_empty() {
            ui.label(&record.description);
        }
    }

    egui::Grid::new("record-details")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Date").weak());
            ui.label(record.date.to_string());
            ui.end_row();
            ui.label(RichText::new("Size").weak());
            ui.label(&record.size);
            ui.end_row();
            ui.label(RichText::new("Resolution").weak());
            ui.label(&record.resolution);
            ui.end_row();
            ui.label(RichText::new("Category").weak());
            ui.label(&record.category);
            ui.end_row();
        });
}
