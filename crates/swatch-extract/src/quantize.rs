//! Channel quantization.

use swatch_core::Rgb;

use crate::config::Quantization;

impl Quantization {
    /// Bucket one color.
    pub fn apply(self, rgb: Rgb) -> Rgb {
        Rgb::new(
            self.channel(rgb.r),
            self.channel(rgb.g),
            self.channel(rgb.b),
        )
    }

    fn channel(self, c: u8) -> u8 {
        let size = match self {
            Self::Exact | Self::Step(0) | Self::Step(1) | Self::Levels(0) => return c,
            Self::Step(step) => step as f32,
            Self::Levels(levels) => 256.0 / levels as f32,
        };
        ((c as f32 / size).round() * size).round().min(255.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_rounds_to_nearest() {
        let q = Quantization::Step(10);
        assert_eq!(q.apply(Rgb::new(14, 15, 255)), Rgb::new(10, 20, 255));
        assert_eq!(q.apply(Rgb::new(0, 4, 96)), Rgb::new(0, 0, 100));
        assert_eq!(q.apply(Rgb::new(30, 60, 90)), Rgb::new(30, 60, 90));
    }

    #[test]
    fn test_levels() {
        let q = Quantization::Levels(24);
        // Bucket size is 256 / 24, about 10.67.
        assert_eq!(q.apply(Rgb::new(0, 5, 6)), Rgb::new(0, 0, 11));
        assert_eq!(q.apply(Rgb::new(255, 250, 128)), Rgb::new(255, 245, 128));
    }

    #[test]
    fn test_exact_and_degenerate_steps() {
        let c = Rgb::new(13, 77, 201);
        assert_eq!(Quantization::Exact.apply(c), c);
        assert_eq!(Quantization::Step(0).apply(c), c);
        assert_eq!(Quantization::Step(1).apply(c), c);
        assert_eq!(Quantization::Levels(0).apply(c), c);
    }

    #[test]
    fn test_near_duplicates_share_a_bucket() {
        let q = Quantization::default();
        assert_eq!(
            q.apply(Rgb::new(201, 99, 48)),
            q.apply(Rgb::new(198, 102, 52))
        );
    }
}
