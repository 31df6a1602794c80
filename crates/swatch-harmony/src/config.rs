//! Tunable constants for harmony generation.

/// Step sizes used by the harmony rules. Hue values are in turns.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct HarmonyConfig {
    /// Lightness change per index away from the base (monochromatic).
    pub monochromatic_step: f64,

    /// Hue change per index away from the base (analogous).
    pub analogous_step: f64,

    /// Distance of the two split colors from the exact complement.
    pub split_offset: f64,

    /// Hue change per index for colors beside the base (split-complementary).
    pub split_step: f64,

    /// Hue change per index away from the base (neutral).
    pub neutral_step: f64,

    /// Saturation multiplier applied to every neutral color.
    pub neutral_saturation: f64,

    /// Saturation/lightness change per step when a rule has more indices than
    /// natural hue slots.
    pub variation_step: f64,
}

impl Default for HarmonyConfig {
    fn default() -> Self {
        Self {
            monochromatic_step: 0.15,
            analogous_step: 0.08,
            split_offset: 0.05,
            split_step: 0.07,
            neutral_step: 0.02,
            neutral_saturation: 0.3,
            variation_step: 0.1,
        }
    }
}

/// Which palette entry the derived colors are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Anchor {
    /// The first unlocked entry, regenerated at random on every call.
    #[default]
    FirstUnlocked,
    /// A specific entry. A locked entry keeps its color and seeds the rest.
    Index(usize),
}

impl Anchor {
    /// Resolve to a concrete index. `None` when every entry is locked.
    ///
    /// An out-of-range `Index` falls back to the first unlocked entry.
    pub fn resolve(self, locked: impl Iterator<Item = bool> + Clone) -> Option<usize> {
        let first_unlocked = locked.clone().position(|l| !l)?;
        match self {
            Self::Index(i) if i < locked.count() => Some(i),
            _ => Some(first_unlocked),
        }
    }
}

/// Options for [`generate_with`](crate::generate_with).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GenerateOptions {
    pub anchor: Anchor,
    pub config: HarmonyConfig,
}
