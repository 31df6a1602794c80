//! Core types and color math for the Swatch palette generator.
//!
//! This crate provides the foundational pieces used by the other swatch crates:
//! - `Rgb`, `Hsl`, and the `Color` swatch value
//! - Hex/RGB/HSL conversions and the brightness check
//! - The named reference-color table and nearest-name lookup
//! - `Palette`, the bounded list the user edits
//! - Error types

pub mod convert;
pub mod errors;
pub mod names;
pub mod palette;
pub mod types;

pub use convert::*;
pub use errors::*;
pub use names::{color_name, NAMED_COLORS};
pub use palette::{Adjustment, Palette, MAX_LEN, MIN_LEN};
pub use types::{Color, Hsl, Rgb};
