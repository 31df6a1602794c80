//! Per-rule color derivation on the HSL wheel.
//!
//! Each rule maps the base color's HSL, an entry's signed offset from the base
//! index, and the palette length to a new HSL triple. Offsets are never zero
//! here: the base entry is handled by the caller.

use swatch_core::{wrap_hue, Hsl};

use crate::config::HarmonyConfig;
use crate::rule::HarmonyRule;

/// Derive the color for the entry `offset` positions from the base.
///
/// Returns `None` for rules without a geometric relationship, meaning the
/// entry should get an independent random color.
pub fn derive_hsl(
    rule: HarmonyRule,
    base: Hsl,
    offset: isize,
    len: usize,
    config: &HarmonyConfig,
) -> Option<Hsl> {
    let len = len.max(1);
    let hsl = match rule {
        HarmonyRule::Auto => return None,
        HarmonyRule::Monochromatic => monochromatic(base, offset, config),
        HarmonyRule::Analogous => analogous(base, offset, config),
        HarmonyRule::Complementary => complementary(base, offset, len, config),
        HarmonyRule::SplitComplementary => split_complementary(base, offset, len, config),
        HarmonyRule::Triadic => hue_slots(base, offset, len, 3, config),
        HarmonyRule::Tetradic => hue_slots(base, offset, len, 4, config),
        HarmonyRule::Neutral => neutral(base, offset, config),
    };
    Some(hsl)
}

fn monochromatic(base: Hsl, offset: isize, config: &HarmonyConfig) -> Hsl {
    let l = base.l + config.monochromatic_step * offset as f64;
    Hsl::new(base.h, base.s, l.clamp(0.0, 1.0))
}

fn analogous(base: Hsl, offset: isize, config: &HarmonyConfig) -> Hsl {
    Hsl::new(
        wrap_hue(base.h + config.analogous_step * offset as f64),
        base.s,
        base.l,
    )
}

/// The entry right after the base (wrapping) is the exact complement. Every
/// other entry is a variation of whichever of the two it sits closer to on
/// the palette ring, ties going to the base.
fn complementary(base: Hsl, offset: isize, len: usize, config: &HarmonyConfig) -> Hsl {
    let complement = Hsl::new(wrap_hue(base.h + 0.5), base.s, base.l);
    let pos = ring_position(offset, len);
    if pos == 1 {
        return complement;
    }

    let to_base = ring_distance(pos, 0, len);
    let to_complement = ring_distance(pos, 1 % len, len);
    if to_base <= to_complement {
        vary(base, to_base, config)
    } else {
        vary(complement, to_complement, config)
    }
}

/// The two entries after the base (wrapping) flank the complement; the rest
/// step away from the base, walking backwards round the ring.
fn split_complementary(base: Hsl, offset: isize, len: usize, config: &HarmonyConfig) -> Hsl {
    let complement = base.h + 0.5;
    let h = match ring_position(offset, len) {
        1 => complement - config.split_offset,
        2 => complement + config.split_offset,
        pos => base.h - config.split_step * (len - pos) as f64,
    };
    Hsl::new(wrap_hue(h), base.s, base.l)
}

/// Split the palette into runs of `ceil(len / slots)` entries; each run takes
/// the next hue slot, and entries after the first in a run are variations.
fn hue_slots(base: Hsl, offset: isize, len: usize, slots: usize, config: &HarmonyConfig) -> Hsl {
    let run = len.div_ceil(slots).max(1) as isize;
    let slot = offset.div_euclid(run);
    let rank = offset.rem_euclid(run) as usize;
    let h = wrap_hue(base.h + slot as f64 / slots as f64);
    vary(Hsl::new(h, base.s, base.l), rank, config)
}

fn neutral(base: Hsl, offset: isize, config: &HarmonyConfig) -> Hsl {
    Hsl::new(
        wrap_hue(base.h + config.neutral_step * offset as f64),
        (base.s * config.neutral_saturation).clamp(0.0, 1.0),
        base.l,
    )
}

/// Shift saturation and lightness `rank` steps away from `hsl`, moving
/// lightness toward the middle of the range so the hue stays visible.
fn vary(hsl: Hsl, rank: usize, config: &HarmonyConfig) -> Hsl {
    if rank == 0 {
        return hsl;
    }
    let amount = config.variation_step * rank as f64;
    let l = if hsl.l < 0.5 {
        hsl.l + amount
    } else {
        hsl.l - amount
    };
    let s = hsl.s * (1.0 - amount);
    Hsl::new(hsl.h, s.clamp(0.0, 1.0), l.clamp(0.0, 1.0))
}

fn ring_position(offset: isize, len: usize) -> usize {
    offset.rem_euclid(len as isize) as usize
}

fn ring_distance(a: usize, b: usize, len: usize) -> usize {
    let d = a.abs_diff(b);
    d.min(len - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Hsl = Hsl::new(0.1, 0.8, 0.4);

    fn derive(rule: HarmonyRule, offset: isize, len: usize) -> Hsl {
        derive_hsl(rule, BASE, offset, len, &HarmonyConfig::default()).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_auto_has_no_geometry() {
        assert!(derive_hsl(HarmonyRule::Auto, BASE, 1, 5, &HarmonyConfig::default()).is_none());
    }

    #[test]
    fn test_monochromatic_steps_lightness() {
        let after = derive(HarmonyRule::Monochromatic, 2, 5);
        assert!(close(after.l, 0.7));
        assert!(close(after.h, BASE.h));
        assert!(close(after.s, BASE.s));

        let before = derive(HarmonyRule::Monochromatic, -1, 5);
        assert!(close(before.l, 0.25));

        let far = derive(HarmonyRule::Monochromatic, 9, 10);
        assert_eq!(far.l, 1.0);
    }

    #[test]
    fn test_analogous_steps_hue() {
        assert!(close(derive(HarmonyRule::Analogous, 1, 5).h, 0.18));
        assert!(close(derive(HarmonyRule::Analogous, 3, 5).h, 0.34));
        // Wraps below zero.
        assert!(close(derive(HarmonyRule::Analogous, -2, 5).h, 0.94));
    }

    #[test]
    fn test_complementary_layout() {
        let comp = derive(HarmonyRule::Complementary, 1, 5);
        assert!(close(comp.h, 0.6));
        assert!(close(comp.l, BASE.l));

        // Position 2 is one step from the complement, two from the base.
        let near_comp = derive(HarmonyRule::Complementary, 2, 5);
        assert!(close(near_comp.h, 0.6));
        assert!(close(near_comp.l, 0.5));

        // Position 4 is one step from the base (wrapping).
        let near_base = derive(HarmonyRule::Complementary, 4, 5);
        assert!(close(near_base.h, BASE.h));
        assert!(close(near_base.l, 0.5));
        assert!(close(near_base.s, 0.72));
    }

    #[test]
    fn test_complementary_two_colors() {
        let comp = derive(HarmonyRule::Complementary, 1, 2);
        assert!(close(comp.h, 0.6));
    }

    #[test]
    fn test_split_complementary_layout() {
        assert!(close(derive(HarmonyRule::SplitComplementary, 1, 5).h, 0.55));
        assert!(close(derive(HarmonyRule::SplitComplementary, 2, 5).h, 0.65));
        assert!(close(derive(HarmonyRule::SplitComplementary, 4, 5).h, 0.03));
        assert!(close(derive(HarmonyRule::SplitComplementary, 3, 5).h, 0.96));
    }

    #[test]
    fn test_triadic_slots() {
        // Three colors: one per slot.
        assert!(close(derive(HarmonyRule::Triadic, 1, 3).h, 0.1 + 1.0 / 3.0));
        assert!(close(derive(HarmonyRule::Triadic, 2, 3).h, 0.1 + 2.0 / 3.0));

        // Six colors: runs of two, second of each run is a variation.
        let varied = derive(HarmonyRule::Triadic, 1, 6);
        assert!(close(varied.h, BASE.h));
        assert!(close(varied.l, 0.5));
        let second_slot = derive(HarmonyRule::Triadic, 2, 6);
        assert!(close(second_slot.h, 0.1 + 1.0 / 3.0));
        assert!(close(second_slot.l, BASE.l));
    }

    #[test]
    fn test_tetradic_slots() {
        for offset in 1..4 {
            let hsl = derive(HarmonyRule::Tetradic, offset, 4);
            assert!(close(hsl.h, wrap_hue(0.1 + 0.25 * offset as f64)));
        }
        // Five colors: runs of two.
        assert!(close(derive(HarmonyRule::Tetradic, 4, 5).h, 0.6));
    }

    #[test]
    fn test_neutral_desaturates() {
        let hsl = derive(HarmonyRule::Neutral, 2, 5);
        assert!(close(hsl.h, 0.14));
        assert!(close(hsl.s, 0.24));
        assert!(close(hsl.l, BASE.l));
    }

    #[test]
    fn test_every_rule_handles_every_length() {
        let config = HarmonyConfig::default();
        for rule in HarmonyRule::ALL {
            for len in 2..=10 {
                for offset in -(len as isize - 1)..len as isize {
                    if offset == 0 {
                        continue;
                    }
                    if let Some(hsl) = derive_hsl(rule, BASE, offset, len, &config) {
                        assert!((0.0..1.0).contains(&hsl.h), "{rule} {len} {offset}");
                        assert!((0.0..=1.0).contains(&hsl.s));
                        assert!((0.0..=1.0).contains(&hsl.l));
                    }
                }
            }
        }
    }
}
