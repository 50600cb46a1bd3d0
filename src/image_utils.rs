use std::io::Cursor;
use std::path::Path;

use eframe::egui;
use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer};
use image::DynamicImage;
use zune_jpeg::JpegDecoder;

/// Largest dimension kept for grid thumbnails.
pub const THUMBNAIL_MAX: u32 = 512;

/// Largest dimensions kept for the detail viewer texture.
pub const VIEWER_MAX: (u32, u32) = (3840, 2160);

/// Decode an image from raw bytes, trying zune-jpeg first for JPEGs and
/// falling back to the standard loader.
pub fn decode_bytes(path: &Path, bytes: &[u8]) -> image::ImageResult<DynamicImage> {
    let is_jpeg = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.eq_ignore_ascii_case("jpg") || s.eq_ignore_ascii_case("jpeg"))
        .unwrap_or(false);

    if is_jpeg {
        let mut decoder = JpegDecoder::new(Cursor::new(bytes));
        if let Ok(pixels) = decoder.decode() {
            if let Some(info) = decoder.info() {
                // zune-jpeg usually returns RGB8
                if let Some(rgb) =
                    image::RgbImage::from_raw(info.width as u32, info.height as u32, pixels)
                {
                    return Ok(DynamicImage::ImageRgb8(rgb));
                }
            }
        }
        // Fallback to standard loader if zune fails
    }
    image::load_from_memory(bytes)
}

/// Pixel dimensions as "WxH".
pub fn resolution_string(image: &DynamicImage) -> String {
    format!("{}x{}", image.width(), image.height())
}

/// Downscale to fit within `max` dimensions, preserving aspect ratio.
/// Images that already fit are returned unchanged.
pub fn downscale_to_fit(image: DynamicImage, (max_w, max_h): (u32, u32)) -> DynamicImage {
    if image.width() <= max_w && image.height() <= max_h {
        return image;
    }

    let ratio = image.width() as f64 / image.height() as f64;
    let (new_w, new_h) = if ratio > max_w as f64 / max_h as f64 {
        (max_w, ((max_w as f64 / ratio) as u32).max(1))
    } else {
        (((max_h as f64 * ratio) as u32).max(1), max_h)
    };

    let src_image = match image {
        DynamicImage::ImageRgb8(ref rgb) => Image::from_vec_u8(
            rgb.width(),
            rgb.height(),
            rgb.as_raw().clone(),
            PixelType::U8x3,
        )
        .ok(),
        DynamicImage::ImageRgba8(ref rgba) => Image::from_vec_u8(
            rgba.width(),
            rgba.height(),
            rgba.as_raw().clone(),
            PixelType::U8x4,
        )
        .ok(),
        _ => {
            let rgba = image.to_rgba8();
            Image::from_vec_u8(rgba.width(), rgba.height(), rgba.into_raw(), PixelType::U8x4).ok()
        }
    };

    let Some(src_image) = src_image else {
        // Resize buffer construction failed; keep the original.
        return image;
    };

    let mut dst_image = Image::new(new_w, new_h, src_image.pixel_type());
    let mut resizer = Resizer::new();
    if resizer
        .resize(&src_image, &mut dst_image, &ResizeOptions::default())
        .is_err()
    {
        return image;
    }

    match src_image.pixel_type() {
        PixelType::U8x3 => image::RgbImage::from_raw(new_w, new_h, dst_image.into_vec())
            .map(DynamicImage::ImageRgb8)
            .unwrap_or(image),
        _ => image::RgbaImage::from_raw(new_w, new_h, dst_image.into_vec())
            .map(DynamicImage::ImageRgba8)
            .unwrap_or(image),
    }
}

pub fn to_color_image(img: &DynamicImage) -> egui::ColorImage {
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();
    egui::ColorImage::from_rgba_unmultiplied(size, &pixels)
}
