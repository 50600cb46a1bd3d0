use chrono::NaiveDate;
use image::{DynamicImage, Rgba, RgbaImage};
use std::path::PathBuf;

use photogallery::record::ImageRecord;

#[allow(dead_code)]
pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
    let pixel = Rgba(color);
    let buffer = RgbaImage::from_pixel(width, height, pixel);
    DynamicImage::ImageRgba8(buffer)
}

#[allow(dead_code)]
pub fn write_image(path: impl Into<PathBuf>, image: &DynamicImage) {
    image
        .save(path.into())
        .expect("failed to write image to disk");
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[allow(dead_code)]
pub fn record(id: i64, name: &str, category: &str, day: NaiveDate) -> ImageRecord {
    ImageRecord {
        id,
        name: name.to_string(),
        source: format!("/library/{name}.jpg"),
        date: day,
        size: "1.0 MB".to_string(),
        resolution: "800x600".to_string(),
        description: String::new(),
        category: category.to_string(),
    }
}
