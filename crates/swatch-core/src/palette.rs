//! The palette the user edits: an ordered, length-bounded list of colors.
//!
//! Every operation here works on an explicit `Palette` value owned by the
//! caller. Order is only ever changed by [`Palette::move_color`].

use rand::Rng;

use crate::convert::wrap_hue;
use crate::errors::PaletteError;
use crate::types::{Color, Hsl};

/// Fewest colors a palette may hold.
pub const MIN_LEN: usize = 2;
/// Most colors a palette may hold.
pub const MAX_LEN: usize = 10;

/// An ordered list of between [`MIN_LEN`] and [`MAX_LEN`] colors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Color>", into = "Vec<Color>")
)]
pub struct Palette {
    colors: Vec<Color>,
}

/// A relative HSL shift applied to every unlocked color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Adjustment {
    /// Hue rotation in turns; the result wraps around the wheel.
    pub hue: f64,
    /// Added to saturation, result clamped to [0, 1].
    pub saturation: f64,
    /// Added to lightness, result clamped to [0, 1].
    pub lightness: f64,
}

impl Adjustment {
    pub fn is_identity(&self) -> bool {
        self.hue == 0.0 && self.saturation == 0.0 && self.lightness == 0.0
    }

    /// Apply the shift to one HSL triple.
    pub fn apply(&self, hsl: Hsl) -> Hsl {
        Hsl::new(
            wrap_hue(hsl.h + self.hue),
            (hsl.s + self.saturation).clamp(0.0, 1.0),
            (hsl.l + self.lightness).clamp(0.0, 1.0),
        )
    }
}

impl Palette {
    /// Wrap a list of colors, enforcing the length bounds.
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        check_len(colors.len())?;
        Ok(Self { colors })
    }

    /// A palette of `len` unlocked random colors.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self, PaletteError> {
        check_len(len)?;
        Ok(Self {
            colors: (0..len).map(|_| Color::random(rng)).collect(),
        })
    }

    /// Parse a list of hex strings into an unlocked palette.
    pub fn from_hexes<S: AsRef<str>>(hexes: &[S]) -> Result<Self, PaletteError> {
        let colors = hexes
            .iter()
            .map(|h| Color::parse(h.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: a palette holds at least [`MIN_LEN`] colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Hex strings in palette order.
    pub fn hexes(&self) -> Vec<&str> {
        self.colors.iter().map(Color::hex).collect()
    }

    pub fn is_all_locked(&self) -> bool {
        self.colors.iter().all(Color::is_locked)
    }

    /// Replace the whole list, e.g. when adopting an extracted palette.
    pub fn replace(&mut self, colors: Vec<Color>) -> Result<(), PaletteError> {
        check_len(colors.len())?;
        self.colors = colors;
        Ok(())
    }

    /// Flip the lock flag at `index`, returning the new state.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool, PaletteError> {
        let locked = !self.checked(index)?.is_locked();
        self.set_locked(index, locked)?;
        Ok(locked)
    }

    pub fn set_locked(&mut self, index: usize, locked: bool) -> Result<(), PaletteError> {
        let current = self.checked(index)?.clone();
        self.colors[index] = current.with_locked(locked);
        Ok(())
    }

    /// Replace the color at `index` with a user-entered value, keeping its
    /// lock flag.
    pub fn set_color(&mut self, index: usize, input: &str) -> Result<(), PaletteError> {
        let locked = self.checked(index)?.is_locked();
        let color = Color::parse(input)?.with_locked(locked);
        self.colors[index] = color;
        Ok(())
    }

    /// Append a random unlocked color.
    pub fn push_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PaletteError> {
        let index = self.colors.len();
        self.insert(index, Color::random(rng))
    }

    pub fn insert(&mut self, index: usize, color: Color) -> Result<(), PaletteError> {
        check_len(self.colors.len() + 1)?;
        if index > self.colors.len() {
            return Err(PaletteError::IndexOutOfRange {
                index,
                len: self.colors.len(),
            });
        }
        self.colors.insert(index, color);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Color, PaletteError> {
        self.checked(index)?;
        check_len(self.colors.len() - 1)?;
        Ok(self.colors.remove(index))
    }

    /// Move the color at `from` so it ends up at `to`, shifting the entries
    /// in between.
    pub fn move_color(&mut self, from: usize, to: usize) -> Result<(), PaletteError> {
        self.checked(from)?;
        self.checked(to)?;
        let color = self.colors.remove(from);
        self.colors.insert(to, color);
        Ok(())
    }

    /// Shift every unlocked color in HSL space. Locked colors are untouched.
    pub fn adjust(&mut self, adjustment: Adjustment) {
        if adjustment.is_identity() {
            return;
        }
        for color in self.colors.iter_mut().filter(|c| !c.is_locked()) {
            *color = Color::from_hsl(adjustment.apply(color.hsl()));
        }
    }

    fn checked(&self, index: usize) -> Result<&Color, PaletteError> {
        self.colors.get(index).ok_or(PaletteError::IndexOutOfRange {
            index,
            len: self.colors.len(),
        })
    }
}

fn check_len(len: usize) -> Result<(), PaletteError> {
    if len < MIN_LEN {
        Err(PaletteError::TooFew { min: MIN_LEN, len })
    } else if len > MAX_LEN {
        Err(PaletteError::TooMany { max: MAX_LEN, len })
    } else {
        Ok(())
    }
}

impl AsRef<[Color]> for Palette {
    fn as_ref(&self) -> &[Color] {
        &self.colors
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = PaletteError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> Palette {
        Palette::from_hexes(&["#FF0000", "#00FF00", "#0000FF"]).unwrap()
    }

    #[test]
    fn test_length_bounds() {
        let one = vec![Color::default()];
        assert_eq!(
            Palette::new(one).unwrap_err(),
            PaletteError::TooFew { min: 2, len: 1 }
        );

        let eleven = vec![Color::default(); 11];
        assert_eq!(
            Palette::new(eleven).unwrap_err(),
            PaletteError::TooMany { max: 10, len: 11 }
        );

        assert!(Palette::new(vec![Color::default(); 2]).is_ok());
        assert!(Palette::new(vec![Color::default(); 10]).is_ok());
    }

    #[test]
    fn test_random_palette() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Palette::random(5, &mut rng).unwrap();
        assert_eq!(p.len(), 5);
        assert!(p.iter().all(|c| !c.is_locked()));
        assert!(Palette::random(0, &mut rng).is_err());
    }

    #[test]
    fn test_from_hexes_rejects_bad_input() {
        let err = Palette::from_hexes(&["#FF0000", "zzz"]).unwrap_err();
        assert!(matches!(err, PaletteError::Color(_)));
    }

    #[test]
    fn test_toggle_lock() {
        let mut p = sample();
        assert!(p.toggle_lock(1).unwrap());
        assert!(p.get(1).unwrap().is_locked());
        assert!(!p.toggle_lock(1).unwrap());
        assert!(!p.get(1).unwrap().is_locked());
        assert!(p.toggle_lock(3).is_err());
    }

    #[test]
    fn test_set_color_keeps_lock() {
        let mut p = sample();
        p.set_locked(0, true).unwrap();
        p.set_color(0, "#abcdef").unwrap();
        let c = p.get(0).unwrap();
        assert_eq!(c.hex(), "#ABCDEF");
        assert!(c.is_locked());
        assert!(p.set_color(0, "#nothex").is_err());
        assert_eq!(p.get(0).unwrap().hex(), "#ABCDEF");
    }

    #[test]
    fn test_insert_remove_bounds() {
        let mut p = Palette::from_hexes(&["#000000", "#FFFFFF"]).unwrap();
        assert!(matches!(p.remove(0), Err(PaletteError::TooFew { .. })));
        assert_eq!(p.len(), 2);

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..8 {
            p.push_random(&mut rng).unwrap();
        }
        assert_eq!(p.len(), MAX_LEN);
        assert!(matches!(
            p.push_random(&mut rng),
            Err(PaletteError::TooMany { .. })
        ));

        let removed = p.remove(0).unwrap();
        assert_eq!(removed.hex(), "#000000");
        assert_eq!(p.len(), 9);
    }

    #[test]
    fn test_move_color() {
        let mut p = sample();
        p.move_color(0, 2).unwrap();
        assert_eq!(p.hexes(), vec!["#00FF00", "#0000FF", "#FF0000"]);
        p.move_color(2, 0).unwrap();
        assert_eq!(p.hexes(), vec!["#FF0000", "#00FF00", "#0000FF"]);
        assert!(p.move_color(0, 5).is_err());
    }

    #[test]
    fn test_adjust_skips_locked() {
        let mut p = sample();
        p.set_locked(0, true).unwrap();
        p.adjust(Adjustment {
            lightness: -0.25,
            ..Default::default()
        });
        assert_eq!(p.get(0).unwrap().hex(), "#FF0000");
        assert_eq!(p.get(1).unwrap().hex(), "#008000");
        assert_eq!(p.get(2).unwrap().hex(), "#000080");
    }

    #[test]
    fn test_adjust_hue_wraps() {
        let mut p = sample();
        p.adjust(Adjustment {
            hue: 1.0 / 3.0,
            ..Default::default()
        });
        assert_eq!(p.hexes(), vec!["#00FF00", "#0000FF", "#FF0000"]);
    }
}
