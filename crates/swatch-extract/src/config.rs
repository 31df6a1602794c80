//! Extraction settings.

/// Number of colors returned when the caller has no preference.
pub const DEFAULT_COUNT: usize = 5;

/// How sampled pixels are bucketed before counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Quantization {
    /// Round each channel to the nearest multiple of the step.
    Step(u8),
    /// Split each channel's 0-255 range into this many buckets and round to
    /// the nearest bucket boundary.
    Levels(u8),
    /// Count exact colors.
    Exact,
}

impl Default for Quantization {
    fn default() -> Self {
        Self::Step(10)
    }
}

/// Configuration for image color extraction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ExtractConfig {
    /// Pixels with alpha below this are skipped.
    pub alpha_threshold: u8,

    /// Upper bound on pixels visited; larger images are sampled at an even
    /// stride.
    pub max_samples: usize,

    /// Channel bucketing applied before counting.
    pub quantization: Quantization,

    /// Encoded images larger than this on either side are scaled down before
    /// sampling. Zero disables scaling.
    pub max_dimension: u32,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: 128,
            max_samples: 10_000,
            quantization: Quantization::default(),
            max_dimension: 800,
        }
    }
}
