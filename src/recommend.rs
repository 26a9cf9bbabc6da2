use serde::{Deserialize, Serialize};

use crate::analysis::{SkinTone, Undertone};

/// Occasion the recommendations are styled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Casual,
    Professional,
    Party,
    Wedding,
}

impl Occasion {
    fn label(&self) -> &'static str {
        match self {
            Occasion::Casual => "Casual",
            Occasion::Professional => "Professional",
            Occasion::Party => "Party",
            Occasion::Wedding => "Wedding",
        }
    }
}

/// Budget bracket, carried through from the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Under500,
    Under1000,
    Premium,
}

/// Inputs the recommendation tables are keyed by
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub skin_tone: SkinTone,
    pub undertone: Undertone,
    pub occasion: Occasion,
    pub budget: Budget,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LipstickShade {
    pub name: String,
    pub hex: String,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DressColor {
    pub name: String,
    pub hex: String,
    pub reason: String,
    pub occasion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakeupStyle {
    pub style: String,
    pub description: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessorySet {
    pub kind: String,
    pub colors: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub lipsticks: Vec<LipstickShade>,
    pub dress_colors: Vec<DressColor>,
    pub makeup_styles: Vec<MakeupStyle>,
    pub accessories: Vec<AccessorySet>,
}

/// Static lookup tables keyed by the classification. Pure data, no
/// algorithm; the analysis stage never depends on this module.
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn generate(request: &RecommendationRequest) -> Recommendations {
        Recommendations {
            lipsticks: Self::lipsticks(request.undertone),
            dress_colors: Self::dress_colors(request.occasion),
            makeup_styles: Self::makeup_styles(request.skin_tone, request.occasion),
            accessories: Self::accessories(request.undertone),
        }
    }

    fn lipsticks(undertone: Undertone) -> Vec<LipstickShade> {
        let shades: &[(&str, &str, &str, &str)] = match undertone {
            Undertone::Warm => &[
                (
                    "Coral Bliss",
                    "#FF7F50",
                    "Vibrant coral perfect for warm undertones",
                    "Everyday",
                ),
                ("Peach Dream", "#FFDAB9", "Soft peachy nude", "Nude"),
                (
                    "Warm Red",
                    "#DC143C",
                    "Classic red with orange undertones",
                    "Bold",
                ),
            ],
            Undertone::Cool => &[
                (
                    "Berry Crush",
                    "#8B008B",
                    "Deep berry for cool undertones",
                    "Bold",
                ),
                (
                    "Pink Mauve",
                    "#D8BFD8",
                    "Sophisticated mauve pink",
                    "Everyday",
                ),
                ("Cool Red", "#C41E3A", "Blue-based classic red", "Bold"),
            ],
            Undertone::Neutral => &[
                ("Versatile Nude", "#C9A88E", "Universal nude shade", "Nude"),
                ("Mauve Rose", "#E0B0C0", "Balanced mauve-rose", "Everyday"),
                ("True Red", "#FF0000", "Pure classic red", "Bold"),
            ],
        };

        shades
            .iter()
            .map(|&(name, hex, description, category)| LipstickShade {
                name: name.to_string(),
                hex: hex.to_string(),
                description: description.to_string(),
                category: category.to_string(),
            })
            .collect()
    }

    fn dress_colors(occasion: Occasion) -> Vec<DressColor> {
        [
            ("Navy Blue", "#000080", "Elegant and versatile"),
            ("Emerald Green", "#50C878", "Rich and sophisticated"),
            ("Classic Red", "#C41E3A", "Timeless and bold"),
        ]
        .iter()
        .map(|&(name, hex, reason)| DressColor {
            name: name.to_string(),
            hex: hex.to_string(),
            reason: reason.to_string(),
            occasion: occasion.label().to_string(),
        })
        .collect()
    }

    fn makeup_styles(skin_tone: SkinTone, occasion: Occasion) -> Vec<MakeupStyle> {
        let mut styles = vec![MakeupStyle {
            style: format!("{} Ready", occasion.label()),
            description: format!(
                "Perfect makeup for {} occasions",
                occasion.label().to_lowercase()
            ),
            tips: vec![
                "Start with good skincare".to_string(),
                "Choose colors that complement your undertone".to_string(),
                "Blend well for a natural finish".to_string(),
            ],
        }];

        if skin_tone == SkinTone::Dark {
            styles.push(MakeupStyle {
                style: "Bold & Beautiful".to_string(),
                description: "Vibrant colors that pop on deeper skin tones".to_string(),
                tips: vec![
                    "Rich, full coverage foundation".to_string(),
                    "Bright blush in coral, fuchsia, or orange".to_string(),
                    "Bright or dark bold lip colors".to_string(),
                ],
            });
        }

        styles
    }

    fn accessories(undertone: Undertone) -> Vec<AccessorySet> {
        let metals: &[&str] = match undertone {
            Undertone::Warm => &["Gold", "Rose Gold", "Copper"],
            Undertone::Cool => &["Silver", "White Gold", "Platinum"],
            Undertone::Neutral => &["Gold", "Silver", "Rose Gold"],
        };

        vec![AccessorySet {
            kind: "Jewelry".to_string(),
            colors: metals.iter().map(|m| m.to_string()).collect(),
            description: format!(
                "Metals that complement {} undertones",
                match undertone {
                    Undertone::Warm => "warm",
                    Undertone::Cool => "cool",
                    Undertone::Neutral => "neutral",
                }
            ),
        }]
    }
}
