//! Dominant-color extraction from raw RGBA pixels.

use indexmap::IndexMap;
use swatch_core::{Color, ExtractError, Rgb};

use crate::config::ExtractConfig;

/// Extract the `k` most frequent colors from an RGBA buffer with the default
/// configuration.
///
/// `pixels` is row-major, 4 bytes per pixel. The result is ordered most
/// frequent first.
pub fn extract(pixels: &[u8], width: u32, height: u32, k: usize) -> Result<Vec<Color>, ExtractError> {
    extract_with_config(pixels, width, height, k, &ExtractConfig::default())
}

/// Extract the `k` most frequent colors with custom configuration.
///
/// Transparent pixels are skipped, at most `config.max_samples` pixels are
/// visited at an even stride, and each visited pixel is quantized before
/// counting. Ties keep the order in which buckets were first seen.
pub fn extract_with_config(
    pixels: &[u8],
    width: u32,
    height: u32,
    k: usize,
    config: &ExtractConfig,
) -> Result<Vec<Color>, ExtractError> {
    let total = pixel_count(pixels, width, height)?;
    if k == 0 || total == 0 {
        return Ok(Vec::new());
    }

    let counts = count_buckets(pixels, total, config);
    Ok(rank(counts, k))
}

fn pixel_count(pixels: &[u8], width: u32, height: u32) -> Result<usize, ExtractError> {
    let total = (width as usize)
        .checked_mul(height as usize)
        .filter(|n| n.checked_mul(4).is_some())
        .ok_or(ExtractError::ImageTooLarge { width, height })?;

    if pixels.len() != total * 4 {
        return Err(ExtractError::InvalidDimensions {
            width,
            height,
            len: pixels.len(),
        });
    }
    Ok(total)
}

/// Sample, filter, and quantize, counting hits per bucket in first-seen order.
fn count_buckets(pixels: &[u8], total: usize, config: &ExtractConfig) -> IndexMap<Rgb, usize> {
    let max_samples = config.max_samples.max(1);
    let stride = (total / max_samples).max(1);

    let mut counts: IndexMap<Rgb, usize> = IndexMap::new();
    let mut skipped = 0usize;

    for px in pixels.chunks_exact(4).step_by(stride).take(max_samples) {
        if px[3] < config.alpha_threshold {
            skipped += 1;
            continue;
        }
        let bucket = config.quantization.apply(Rgb::new(px[0], px[1], px[2]));
        *counts.entry(bucket).or_insert(0) += 1;
    }

    log::debug!(
        "sampled {total} pixels at stride {stride}: {skipped} transparent, {} buckets",
        counts.len()
    );
    counts
}

fn rank(counts: IndexMap<Rgb, usize>, k: usize) -> Vec<Color> {
    let mut ranked: Vec<(Rgb, usize)> = counts.into_iter().collect();
    // Stable, so equal counts stay in first-seen order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(k)
        .map(|(rgb, _)| Color::from_rgb(rgb))
        .collect()
}
