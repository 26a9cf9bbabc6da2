use serde::{Deserialize, Serialize};

/// RGB color value with integer channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Fallback color for regions that yielded no samples
    pub const NEUTRAL_GRAY: Rgb = Rgb {
        r: 128,
        g: 128,
        b: 128,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Ratio of red to green; 1.0 when green is zero
    pub fn red_green_ratio(&self) -> f64 {
        if self.g == 0 {
            1.0
        } else {
            self.r as f64 / self.g as f64
        }
    }

    /// Ratio of red to blue; 1.0 when blue is zero
    pub fn red_blue_ratio(&self) -> f64 {
        if self.b == 0 {
            1.0
        } else {
            self.r as f64 / self.b as f64
        }
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(px: image::Rgb<u8>) -> Self {
        Self::new(px[0], px[1], px[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_channels_default_ratio_to_one() {
        let color = Rgb::new(120, 0, 0);
        assert_eq!(color.red_green_ratio(), 1.0);
        assert_eq!(color.red_blue_ratio(), 1.0);
    }

    #[test]
    fn test_ratios() {
        let color = Rgb::new(220, 200, 185);
        assert!((color.red_green_ratio() - 1.1).abs() < 1e-9);
        assert!((color.red_blue_ratio() - 220.0 / 185.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_image_pixel() {
        let px = image::Rgb([10u8, 20, 30]);
        assert_eq!(Rgb::from(px), Rgb::new(10, 20, 30));
    }
}
