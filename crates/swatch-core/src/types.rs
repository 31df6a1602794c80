//! Value types shared by the generator and the extractor.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::convert::{hex_to_rgb, hsl_to_rgb, is_light_color, rgb_to_hex, rgb_to_hsl};
use crate::errors::ColorError;
use crate::names::color_name;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB` encoding.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r as i32, self.g as i32, self.b as i32)
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// Squared Euclidean distance in RGB space.
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(&normalize_hex(s)).ok_or_else(|| ColorError::InvalidHex {
            value: s.to_string(),
        })
    }
}

/// A hue/saturation/lightness triple.
///
/// `h` is a fraction of a turn in [0, 1); `s` and `l` are fractions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

/// One swatch in a palette.
///
/// `rgb` is always the decode of `hex`; both are fixed at construction and
/// every update goes through a constructor or a `with_*` method that returns
/// a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ColorRepr", into = "ColorRepr")
)]
pub struct Color {
    hex: String,
    rgb: Rgb,
    locked: bool,
    name: Option<String>,
}

impl Color {
    /// Build an unlocked color from RGB channels, resolving its name.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let hex = rgb.to_hex();
        let name = color_name(&hex).to_string();
        Self {
            hex,
            rgb,
            locked: false,
            name: Some(name),
        }
    }

    /// Build an unlocked color from HSL, rounding to the nearest 8-bit RGB.
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_rgb(hsl.to_rgb())
    }

    /// Build an unlocked color from a strict `#RRGGBB` string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex_to_rgb(hex).map(Self::from_rgb)
    }

    /// Parse user input: surrounding whitespace and a missing `#` are tolerated.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        input.parse::<Rgb>().map(Self::from_rgb)
    }

    /// A uniformly random color: each of the six hex digits is drawn from `0-F`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut channel = || {
            let hi: u8 = rng.gen_range(0..16);
            let lo: u8 = rng.gen_range(0..16);
            hi << 4 | lo
        };
        let (r, g, b) = (channel(), channel(), channel());
        Self::from_rgb(Rgb::new(r, g, b))
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.rgb.to_hsl()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether dark foreground text should be used on this color.
    pub fn is_light(&self) -> bool {
        is_light_color(&self.hex)
    }

    /// The same color with the given lock flag.
    pub fn with_locked(self, locked: bool) -> Self {
        Self { locked, ..self }
    }

    /// The same color with a custom label.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgb(Rgb::BLACK)
    }
}

/// Uppercase, trimmed, with a leading `#`.
pub(crate) fn normalize_hex(input: &str) -> String {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    format!("#{}", digits.to_ascii_uppercase())
}

/// Wire shape of [`Color`]. `rgb` is emitted for consumers but re-derived
/// from `hex` on input.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ColorRepr {
    hex: String,
    #[serde(default, skip_deserializing)]
    rgb: Rgb,
    #[serde(default)]
    locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<ColorRepr> for Color {
    type Error = ColorError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        let color = Color::parse(&repr.hex)?.with_locked(repr.locked);
        Ok(match repr.name {
            Some(name) => color.with_name(name),
            None => color,
        })
    }
}

#[cfg(feature = "serde")]
impl From<Color> for ColorRepr {
    fn from(color: Color) -> Self {
        Self {
            hex: color.hex,
            rgb: color.rgb,
            locked: color.locked,
            name: color.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_color_from_hex_derives_rgb_and_name() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert_eq!(c.hex(), "#FF0000");
        assert_eq!(c.rgb(), Rgb::new(255, 0, 0));
        assert_eq!(c.name(), Some("Red"));
        assert!(!c.is_locked());
    }

    #[test]
    fn test_color_from_hex_is_strict() {
        assert!(Color::from_hex("ff0000").is_none());
        assert!(Color::from_hex("#ff00").is_none());
    }

    #[test]
    fn test_color_parse_is_lenient() {
        let c = Color::parse("  3b82f6 ").unwrap();
        assert_eq!(c.hex(), "#3B82F6");

        let err = Color::parse("#xyz").unwrap_err();
        assert!(matches!(err, ColorError::InvalidHex { .. }));
    }

    #[test]
    fn test_with_locked_keeps_color() {
        let c = Color::from_hex("#123456").unwrap();
        let locked = c.clone().with_locked(true);
        assert!(locked.is_locked());
        assert_eq!(locked.hex(), c.hex());
        assert_eq!(locked.rgb(), c.rgb());
        assert_ne!(locked, c);
    }

    #[test]
    fn test_random_color_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let c = Color::random(&mut rng);
            assert_eq!(c.hex().len(), 7);
            assert_eq!(hex_to_rgb(c.hex()), Some(c.rgb()));
            assert!(c.name().is_some());
        }
    }

    #[test]
    fn test_random_color_is_seedable() {
        let a = Color::random(&mut StdRng::seed_from_u64(42));
        let b = Color::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_rgb_distance() {
        assert_eq!(Rgb::BLACK.distance_squared(Rgb::BLACK), 0);
        assert_eq!(Rgb::new(255, 0, 0).distance_squared(Rgb::new(254, 0, 1)), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_color_serde_rederives_rgb() {
        let json = r##"{"hex":"#00ff00","rgb":{"r":1,"g":2,"b":3},"locked":true}"##;
        let c: Color = serde_json::from_str(json).unwrap();
        assert_eq!(c.hex(), "#00FF00");
        assert_eq!(c.rgb(), Rgb::new(0, 255, 0));
        assert!(c.is_locked());
        assert_eq!(c.name(), Some("Lime"));

        let out = serde_json::to_value(&c).unwrap();
        assert_eq!(out["hex"], "#00FF00");
        assert_eq!(out["rgb"]["g"], 255);
    }
}
