use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense};

use crate::record::ImageRecord;
use crate::ui::fit_within;
use crate::view::{visible_records, CategoryFilter, SortMode};

use super::{today, Action, GalleryApp, Tier};

const CARD_WIDTH: f32 = 230.0;
const CARD_HEIGHT: f32 = 240.0;
const THUMB_AREA: egui::Vec2 = egui::Vec2::new(210.0, 140.0);

pub fn show(app: &mut GalleryApp, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
    header(app, ui, actions);
    filter_row(app, ui, actions);
    ui.separator();

    // Clone the visible slice so the cards can borrow the app mutably for
    // texture requests while rendering.
    let set = visible_records(app.gallery.records(), &app.view, today());
    let has_more = set.has_more;
    let total_matching = set.total_matching;
    let visible: Vec<ImageRecord> = set.records.into_iter().cloned().collect();

    let columns = ((ui.available_width() / CARD_WIDTH).floor() as usize).max(1);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if visible.is_empty() {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("No images match the current view.")
                            .italics()
                            .color(Color32::GRAY),
                    );
                });
                return;
            }

            for row in visible.chunks(columns) {
                ui.horizontal(|ui| {
                    for record in row {
                        card(app, ui, record, actions);
                    }
                });
            }

            if has_more {
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("Load more").clicked() {
                        actions.push(Action::LoadMore);
                    }
                });
            }

            ui.add_space(8.0);
        });

    ui.separator();
    footer(app, ui, visible.len(), total_matching);
}

fn header(app: &mut GalleryApp, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        ui.heading("Photo Gallery");
        ui.separator();
        if ui.button("Import images...").clicked() {
            actions.push(Action::PickFiles);
        }
        let clear = ui.add_enabled(!app.gallery.is_empty(), egui::Button::new("Clear all"));
        if clear.clicked() {
            actions.push(Action::ClearAll);
        }
        if app.view.importing {
            ui.add(
                egui::ProgressBar::new(app.import_progress())
                    .desired_width(160.0)
                    .show_percentage(),
            );
        }
    });

    ui.horizontal(|ui| {
        ui.label("Search:");
        let search = ui.add(
            egui::TextEdit::singleline(&mut app.view.search)
                .hint_text("name or description")
                .desired_width(220.0),
        );
        if search.changed() {
            actions.push(Action::SearchChanged);
        }

        ui.separator();
        ui.label("Sort:");
        let mut sort = app.view.sort;
        egui::ComboBox::from_id_salt("sort-mode")
            .selected_text(sort.label())
            .show_ui(ui, |ui| {
                for mode in SortMode::ALL {
                    ui.selectable_value(&mut sort, mode, mode.label());
                }
            });
        if sort != app.view.sort {
            actions.push(Action::SetSort(sort));
        }
    });
}

fn filter_row(app: &GalleryApp, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
    ui.horizontal_wrapped(|ui| {
        let mut filters = vec![CategoryFilter::All, CategoryFilter::Recent];
        filters.extend(
            app.gallery
                .categories()
                .into_iter()
                .map(CategoryFilter::Category),
        );
        for filter in filters {
            let selected = app.view.filter == filter;
            if ui.selectable_label(selected, filter.label()).clicked() && !selected {
                actions.push(Action::SetFilter(filter));
            }
        }
    });
}

fn card(app: &mut GalleryApp, ui: &mut egui::Ui, record: &ImageRecord, actions: &mut Vec<Action>) {
    app.request_thumb(record, Tier::Thumb);

    ui.allocate_ui_with_layout(
        egui::vec2(CARD_WIDTH, CARD_HEIGHT),
        egui::Layout::top_down(egui::Align::Min),
        |ui| {
            ui.group(|ui| {
                ui.set_width(CARD_WIDTH - 16.0);

                thumbnail(app, ui, record, actions);

                ui.label(RichText::new(&record.name).strong());
                if !record.description.is_empty() {
                    ui.label(RichText::new(truncated(&record.description, 60)).small());
                }
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&record.category)
                            .small()
                            .color(Color32::LIGHT_BLUE),
                    );
                    ui.label(RichText::new(record.date.to_string()).small().weak());
                });

                ui.horizontal(|ui| {
                    if ui.small_button("View").clicked() {
                        actions.push(Action::OpenViewer(record.id));
                    }
                    if ui.small_button("Save").clicked() {
                        actions.push(Action::Download(record.id));
                    }
                    if ui.small_button("Delete").clicked() {
                        actions.push(Action::Delete(record.id));
                    }
                });
            });
        },
    );
}

fn thumbnail(app: &GalleryApp, ui: &mut egui::Ui, record: &ImageRecord, actions: &mut Vec<Action>) {
    if let Some(texture) = app.texture_for(record, Tier::Thumb) {
        let (size, _) = fit_within(texture.size_vec2(), THUMB_AREA);
        let image = egui::Image::new((texture.id(), size)).sense(Sense::click());
        if ui.add(image).clicked() {
            actions.push(Action::OpenViewer(record.id));
        }
        return;
    }

    let (rect, response) = ui.allocate_exact_size(THUMB_AREA, Sense::click());
    ui.painter().rect_filled(rect, 4.0, Color32::from_gray(30));
    let caption = if !record.is_local() {
        "Remote image"
    } else if app.thumb_failed(record) {
        "No preview"
    } else {
        "Loading..."
    };
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        caption,
        FontId::proportional(14.0),
        Color32::GRAY,
    );
    if response.clicked() {
        actions.push(Action::OpenViewer(record.id));
    }
}

fn footer(app: &GalleryApp, ui: &mut egui::Ui, shown: usize, total_matching: usize) {
    ui.horizontal(|ui| {
        ui.label(&app.status);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!(
                    "Showing {shown} of {total_matching} ({} in gallery)",
                    app.gallery.len()
                ))
                .weak(),
            );
        });
    });
}

fn truncated(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}
