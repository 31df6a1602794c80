//! Dominant-color extraction from images.
//!
//! # Pipeline Overview
//!
//! 1. **Decode** (optional): encoded bytes to RGBA8, scaled down if large
//! 2. **Sample**: visit at most `max_samples` pixels at an even stride
//! 3. **Filter**: skip pixels below the alpha threshold
//! 4. **Quantize**: bucket channels so photographic noise groups together
//! 5. **Rank**: count buckets, most frequent first, first-seen wins ties
//!
//! # Example
//!
//! ```
//! use swatch_extract::extract;
//!
//! // 2x1 image: one red pixel, one blue.
//! let pixels = [255, 0, 0, 255, 0, 0, 255, 255];
//! let colors = extract(&pixels, 2, 1, 5)?;
//! assert_eq!(colors[0].hex(), "#FF0000");
//! # Ok::<(), swatch_extract::ExtractError>(())
//! ```

pub mod config;
pub mod decode;
pub mod extract;
pub mod quantize;

pub use config::{ExtractConfig, Quantization, DEFAULT_COUNT};
pub use decode::{decode_rgba, extract_from_image};
pub use extract::{extract, extract_with_config};
pub use swatch_core::ExtractError;
