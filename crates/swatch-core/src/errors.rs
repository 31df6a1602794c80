//! Error types for the Swatch palette generator.

use thiserror::Error;

/// Top-level error type for the Swatch crates.
#[derive(Debug, Error)]
pub enum SwatchError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Harmony(#[from] HarmonyError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Errors parsing a color from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid color format: {value:?} (expected #RRGGBB)")]
    InvalidHex { value: String },
}

/// Errors from palette editing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("Palette needs at least {min} colors, got {len}")]
    TooFew { min: usize, len: usize },

    #[error("Palette holds at most {max} colors, got {len}")]
    TooMany { max: usize, len: usize },

    #[error("Index {index} out of range for palette of {len} colors")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Errors selecting a harmony rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarmonyError {
    #[error("Unknown harmony rule: {name}")]
    UnknownRule { name: String },
}

/// Errors during image color extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to decode image: {0}")]
    ImageDecode(String),

    #[error("Pixel buffer of {len} bytes does not match a {width}x{height} RGBA image")]
    InvalidDimensions { width: u32, height: u32, len: usize },

    #[error("Image of {width}x{height} pixels is too large")]
    ImageTooLarge { width: u32, height: u32 },
}
