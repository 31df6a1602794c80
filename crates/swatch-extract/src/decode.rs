//! Extraction from encoded image files.

use image::imageops::FilterType;
use image::RgbaImage;
use swatch_core::{Color, ExtractError};

use crate::config::ExtractConfig;
use crate::extract::extract_with_config;

/// Decode PNG/JPEG/GIF/WebP bytes and extract the `k` most frequent colors.
///
/// Images larger than `config.max_dimension` on either side are scaled down
/// first. Decode failures are returned as [`ExtractError::ImageDecode`]; no
/// partial palette is produced.
pub fn extract_from_image(
    bytes: &[u8],
    k: usize,
    config: &ExtractConfig,
) -> Result<Vec<Color>, ExtractError> {
    let rgba = decode_rgba(bytes, config.max_dimension)?;
    let (width, height) = rgba.dimensions();
    extract_with_config(rgba.as_raw(), width, height, k, config)
}

/// Decode to RGBA8, scaling down past `max_dimension`.
pub fn decode_rgba(bytes: &[u8], max_dimension: u32) -> Result<RgbaImage, ExtractError> {
    let img = image::load_from_memory(bytes).map_err(|e| ExtractError::ImageDecode(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    if max_dimension == 0 || (width <= max_dimension && height <= max_dimension) {
        return Ok(rgba);
    }

    let scale = max_dimension as f32 / width.max(height) as f32;
    let new_width = ((width as f32 * scale) as u32).max(1);
    let new_height = ((height as f32 * scale) as u32).max(1);
    log::debug!("scaling {width}x{height} image to {new_width}x{new_height}");

    // Nearest keeps source colors intact instead of blending new ones.
    Ok(image::imageops::resize(
        &rgba,
        new_width,
        new_height,
        FilterType::Nearest,
    ))
}
