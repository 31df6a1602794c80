//! Palette generation.

use rand::Rng;
use swatch_core::{Color, Palette, PaletteError};

use crate::config::GenerateOptions;
use crate::rule::HarmonyRule;
use crate::wheel::derive_hsl;

/// Generate a new palette from `palette` under `rule`.
///
/// The result has the same length and lock flags as the input. Locked entries
/// are returned as-is; every unlocked entry is replaced.
pub fn generate<R: Rng + ?Sized>(palette: &[Color], rule: HarmonyRule, rng: &mut R) -> Vec<Color> {
    generate_with(palette, rule, &GenerateOptions::default(), rng)
}

/// [`generate`] with an explicit anchor and step configuration.
pub fn generate_with<R: Rng + ?Sized>(
    palette: &[Color],
    rule: HarmonyRule,
    options: &GenerateOptions,
    rng: &mut R,
) -> Vec<Color> {
    let Some(base_index) = options.anchor.resolve(palette.iter().map(Color::is_locked)) else {
        log::debug!("all {} colors locked, nothing to generate", palette.len());
        return palette.to_vec();
    };

    if rule == HarmonyRule::Auto {
        return palette
            .iter()
            .map(|c| {
                if c.is_locked() {
                    c.clone()
                } else {
                    Color::random(rng)
                }
            })
            .collect();
    }

    let mut out = palette.to_vec();
    if !out[base_index].is_locked() {
        out[base_index] = Color::random(rng);
    }
    let base = out[base_index].hsl();
    log::debug!(
        "{rule}: base index {base_index} ({}), {} colors",
        out[base_index].hex(),
        out.len()
    );

    let len = out.len();
    for (i, color) in out.iter_mut().enumerate() {
        if i == base_index || color.is_locked() {
            continue;
        }
        let offset = i as isize - base_index as isize;
        *color = match derive_hsl(rule, base, offset, len, &options.config) {
            Some(hsl) => Color::from_hsl(hsl),
            None => Color::random(rng),
        };
    }

    out
}

/// [`generate`] over a bounded [`Palette`].
pub fn generate_palette<R: Rng + ?Sized>(
    palette: &Palette,
    rule: HarmonyRule,
    rng: &mut R,
) -> Result<Palette, PaletteError> {
    Palette::new(generate(palette.colors(), rule, rng))
}

/// A uniformly random color, the building block of the `auto` rule.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::random(rng)
}
