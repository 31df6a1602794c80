//! The closed set of harmony rules.

use std::fmt;
use std::str::FromStr;

use swatch_core::HarmonyError;

/// A named strategy for deriving related colors from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum HarmonyRule {
    /// Independent random colors, no relationship enforced.
    #[default]
    Auto,
    /// One hue, stepped lightness.
    Monochromatic,
    /// Neighboring hues.
    Analogous,
    /// Base plus the opposite hue.
    Complementary,
    /// Base plus the two hues flanking its complement.
    SplitComplementary,
    /// Three hues a third of a turn apart.
    Triadic,
    /// Four hues a quarter turn apart.
    Tetradic,
    /// Heavily desaturated, near-identical hues.
    Neutral,
}

impl HarmonyRule {
    pub const ALL: [HarmonyRule; 8] = [
        Self::Auto,
        Self::Monochromatic,
        Self::Analogous,
        Self::Complementary,
        Self::SplitComplementary,
        Self::Triadic,
        Self::Tetradic,
        Self::Neutral,
    ];

    /// The kebab-case name used by callers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Neutral => "neutral",
        }
    }

    /// Look up a rule by name, falling back to [`HarmonyRule::Auto`] for
    /// anything unrecognized so a bad name never blocks generation.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: HarmonyError| {
            log::warn!("{err}; falling back to auto");
            Self::Auto
        })
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyRule {
    type Err = HarmonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|rule| rule.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| HarmonyError::UnknownRule {
                name: s.to_string(),
            })
    }
}
