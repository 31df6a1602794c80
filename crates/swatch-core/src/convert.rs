//! Conversions between hex, RGB, and HSL color representations.
//!
//! Every component that needs color math goes through these functions, so
//! hex encoding and HSL rounding behave the same way everywhere.

use crate::types::{Hsl, Rgb};

/// Decode a `#RRGGBB` string into its RGB channels.
///
/// Hex digits are case-insensitive. Returns `None` for anything shorter than
/// 7 characters or not of the exact `#RRGGBB` shape; malformed input is never
/// repaired.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let bytes = hex.as_bytes();
    if bytes.len() != 7 || bytes[0] != b'#' {
        return None;
    }
    if !bytes[1..].iter().all(u8::is_ascii_hexdigit) {
        return None;
    }

    let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
    let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
    let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// Encode channels as an uppercase `#RRGGBB` string.
///
/// Each channel is clamped to [0, 255] first, so the output is always exactly
/// 7 characters.
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    format!(
        "#{:02X}{:02X}{:02X}",
        clamp_channel(r),
        clamp_channel(g),
        clamp_channel(b)
    )
}

fn clamp_channel(c: i32) -> u8 {
    c.clamp(0, 255) as u8
}

/// Convert RGB to HSL. Hue is a fraction of a turn in [0, 1).
///
/// Achromatic colors (all channels equal) get hue 0 and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(wrap_hue(h / 6.0), s, l)
}

/// Convert HSL back to 8-bit RGB, rounding each channel.
///
/// Hue is wrapped into [0, 1); saturation and lightness are clamped to [0, 1].
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = wrap_hue(hsl.h);
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = to_channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, h)),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Wrap a hue (in turns) into [0, 1).
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(1.0);
    // rem_euclid can return exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// YIQ perceptual brightness, in [0, 255].
pub fn brightness(rgb: Rgb) -> f64 {
    (rgb.r as f64 * 299.0 + rgb.g as f64 * 587.0 + rgb.b as f64 * 114.0) / 1000.0
}

/// Whether dark text reads better than light text on this color.
///
/// Malformed hex is treated as black.
pub fn is_light_color(hex: &str) -> bool {
    let rgb = hex_to_rgb(hex).unwrap_or(Rgb::BLACK);
    brightness(rgb) >= 128.0
}
