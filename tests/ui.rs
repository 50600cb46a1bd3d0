use eframe::egui::{self, Rect, Vec2};
use photogallery::ui::*;

#[test]
fn image_metrics_center_image_and_compute_scale() {
    let canvas = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(200.0, 100.0));
    let metrics = ImageMetrics::new(canvas, Vec2::new(50.0, 50.0));
    assert!(metrics.scale > 0.0);
    assert_eq!(metrics.image_size, Vec2::new(50.0, 50.0));
    assert!((metrics.image_rect.center() - canvas.center()).length_sq() < 1.0);
}

#[test]
fn fit_within_respects_available_bounds() {
    let (display, scale) = fit_within(Vec2::new(400.0, 100.0), Vec2::new(200.0, 200.0));
    assert_eq!(display.x, 200.0);
    assert!(display.y <= 200.0);
    assert_eq!(scale, 0.5);
}

#[test]
fn fit_within_never_produces_zero_scale() {
    let (_, scale) = fit_within(Vec2::new(0.0, 0.0), Vec2::new(200.0, 200.0));
    assert!(scale > 0.0);
}
