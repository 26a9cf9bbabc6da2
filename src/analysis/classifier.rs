use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// Lightness-based skin tone bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinTone {
    Fair,
    Wheatish,
    Dark,
}

/// Warm/cool/neutral classification independent of lightness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl SkinTone {
    /// Fixed decision tree, first match wins. Comparisons are strict, so
    /// channel values exactly at a threshold fall through to the next branch.
    pub fn from_color(color: Rgb) -> Self {
        if color.r > 200 && color.g > 180 && color.b > 160 {
            SkinTone::Fair
        } else if color.r > 150 && color.g > 120 && color.b > 100 {
            SkinTone::Wheatish
        } else {
            SkinTone::Dark
        }
    }
}

impl Undertone {
    /// Ratio thresholds over red/green and red/blue; a zero divisor channel
    /// defaults its ratio to 1.0.
    pub fn from_color(color: Rgb) -> Self {
        let rg = color.red_green_ratio();
        let rb = color.red_blue_ratio();

        if rg > 1.1 && rb > 1.2 {
            Undertone::Warm
        } else if rg < 0.9 && rb < 1.0 {
            Undertone::Cool
        } else {
            Undertone::Neutral
        }
    }
}
