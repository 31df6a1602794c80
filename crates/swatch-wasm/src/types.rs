//! JavaScript-friendly option objects for the WASM bindings.

use serde::{Deserialize, Serialize};
use swatch_extract::{ExtractConfig, Quantization};
use swatch_harmony::{Anchor, GenerateOptions, HarmonyConfig};

/// Generation options from JavaScript. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptionsJs {
    /// Index to derive the harmony from; defaults to the first unlocked color.
    #[serde(default)]
    pub anchor: Option<usize>,
    /// Step overrides; missing fields keep their defaults.
    #[serde(default)]
    pub config: Option<HarmonyConfig>,
}

impl GenerateOptionsJs {
    pub fn into_core(self) -> GenerateOptions {
        GenerateOptions {
            anchor: self.anchor.map_or(Anchor::FirstUnlocked, Anchor::Index),
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Extraction options from JavaScript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOptionsJs {
    #[serde(default)]
    pub alpha_threshold: Option<u8>,
    #[serde(default)]
    pub max_samples: Option<usize>,
    /// Round channels to multiples of this step.
    #[serde(default)]
    pub step: Option<u8>,
    /// Split channels into this many levels; wins over `step`.
    #[serde(default)]
    pub levels: Option<u8>,
    #[serde(default)]
    pub max_dimension: Option<u32>,
}

impl ExtractOptionsJs {
    pub fn into_core(self) -> ExtractConfig {
        let mut config = ExtractConfig::default();
        if let Some(alpha) = self.alpha_threshold {
            config.alpha_threshold = alpha;
        }
        if let Some(n) = self.max_samples {
            config.max_samples = n;
        }
        if let Some(levels) = self.levels {
            config.quantization = Quantization::Levels(levels);
        } else if let Some(step) = self.step {
            config.quantization = Quantization::Step(step);
        }
        if let Some(d) = self.max_dimension {
            config.max_dimension = d;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_options_defaults() {
        let opts: GenerateOptionsJs = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.into_core(), GenerateOptions::default());
    }

    #[test]
    fn test_generate_options_partial_config() {
        let opts: GenerateOptionsJs =
            serde_json::from_str(r#"{"anchor": 2, "config": {"analogousStep": 0.1}}"#).unwrap();
        let core = opts.into_core();
        assert_eq!(core.anchor, Anchor::Index(2));
        assert_eq!(core.config.analogous_step, 0.1);
        assert_eq!(core.config.monochromatic_step, 0.15);
    }

    #[test]
    fn test_extract_options() {
        let opts: ExtractOptionsJs =
            serde_json::from_str(r#"{"alphaThreshold": 125, "step": 8, "levels": 24}"#).unwrap();
        let config = opts.into_core();
        assert_eq!(config.alpha_threshold, 125);
        assert_eq!(config.quantization, Quantization::Levels(24));
        assert_eq!(config.max_samples, 10_000);

        let opts: ExtractOptionsJs = serde_json::from_str(r#"{"step": 8}"#).unwrap();
        assert_eq!(opts.into_core().quantization, Quantization::Step(8));
    }
}
