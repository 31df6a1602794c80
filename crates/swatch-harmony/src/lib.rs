//! Color-harmony palette generation.
//!
//! Given the current palette and a [`HarmonyRule`], [`generate`] returns a new
//! palette of the same length. Locked colors pass through untouched; the
//! first unlocked color becomes a fresh random base, and every other unlocked
//! color is derived from the base's position on the HSL wheel.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use swatch_core::Palette;
//! use swatch_harmony::{generate, HarmonyRule};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let palette = Palette::random(5, &mut rng).unwrap();
//! let next = generate(palette.colors(), HarmonyRule::Triadic, &mut rng);
//! assert_eq!(next.len(), 5);
//! ```
//!
//! Randomness is always supplied by the caller, so a seeded RNG makes
//! generation fully reproducible.

pub mod config;
pub mod generate;
pub mod rule;
pub mod wheel;

pub use config::{Anchor, GenerateOptions, HarmonyConfig};
pub use generate::{generate, generate_palette, generate_with, random_color};
pub use rule::HarmonyRule;
pub use wheel::derive_hsl;
