use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

pub const UPPER_LIP: &str = "upper_lip";
pub const LOWER_LIP: &str = "lower_lip";
pub const LEFT_CHEEK: &str = "left_cheek";
pub const RIGHT_CHEEK: &str = "right_cheek";
pub const FOREHEAD: &str = "forehead";
pub const NOSE_TIP: &str = "nose_tip";

/// Static mapping from region name to MediaPipe Face Mesh landmark indices.
///
/// Loaded once at process start and read-only thereafter. Indices may
/// reference points the detector does not emit in degraded modes; the
/// sampler skips those silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionTable {
    regions: IndexMap<String, Vec<usize>>,
}

impl Default for RegionTable {
    fn default() -> Self {
        let mut regions = IndexMap::new();
        regions.insert(
            LEFT_CHEEK.to_string(),
            vec![50, 101, 165, 234, 127, 162, 21, 54, 103, 67, 109],
        );
        regions.insert(
            RIGHT_CHEEK.to_string(),
            vec![280, 351, 421, 346, 280, 330, 296, 334, 293, 300, 384],
        );
        regions.insert(
            FOREHEAD.to_string(),
            vec![10, 9, 151, 337, 299, 333, 298, 301],
        );
        regions.insert(
            NOSE_TIP.to_string(),
            vec![
                1, 2, 5, 4, 6, 19, 20, 94, 125, 141, 235, 236, 237, 238, 239, 240, 241, 242,
            ],
        );
        regions.insert(
            UPPER_LIP.to_string(),
            vec![
                61, 84, 17, 314, 405, 291, 375, 321, 308, 324, 318, 402, 317, 14, 87, 178, 88, 95,
            ],
        );
        regions.insert(
            LOWER_LIP.to_string(),
            vec![
                78, 191, 80, 81, 82, 13, 312, 311, 310, 415, 308, 324, 318, 402, 317, 14, 87, 178,
                88, 95,
            ],
        );
        Self { regions }
    }
}

impl RegionTable {
    pub fn from_json_str(json: &str) -> Result<Self, AnalysisError> {
        let table: Self = serde_json::from_str(json)?;
        table.validate().map_err(AnalysisError::Config)?;
        Ok(table)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, AnalysisError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::Config(format!("Cannot read region table: {}", e)))?;
        Self::from_json_str(&json)
    }

    /// Validate that the table can drive an analysis
    pub fn validate(&self) -> Result<(), String> {
        if self.regions.is_empty() {
            return Err("Region table is empty".to_string());
        }

        for lip in [UPPER_LIP, LOWER_LIP] {
            if !self.regions.contains_key(lip) {
                return Err(format!("Region table is missing the {} region", lip));
            }
        }

        if self.skin_regions().next().is_none() {
            return Err("Region table has no skin regions".to_string());
        }

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&[usize]> {
        self.regions.get(name).map(Vec::as_slice)
    }

    /// Regions sampled for skin tone, in declaration order. The nose is
    /// excluded because shine on it biases the dominant-color estimate;
    /// lips are handled separately.
    pub fn skin_regions(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.regions
            .iter()
            .filter(|(name, _)| {
                let name = name.as_str();
                name != NOSE_TIP && name != UPPER_LIP && name != LOWER_LIP
            })
            .map(|(name, indices)| (name.as_str(), indices.as_slice()))
    }

    /// Union of upper and lower lip indices, duplicates kept
    pub fn lip_indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        for lip in [UPPER_LIP, LOWER_LIP] {
            if let Some(lip_indices) = self.get(lip) {
                indices.extend_from_slice(lip_indices);
            }
        }
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        assert!(RegionTable::default().validate().is_ok());
    }

    #[test]
    fn test_skin_regions_exclude_nose_and_lips() {
        let table = RegionTable::default();
        let names: Vec<&str> = table.skin_regions().map(|(name, _)| name).collect();
        assert_eq!(names, vec![LEFT_CHEEK, RIGHT_CHEEK, FOREHEAD]);
    }

    #[test]
    fn test_lip_union_keeps_duplicates() {
        let table = RegionTable::default();
        let lips = table.lip_indices();
        let upper = table.get(UPPER_LIP).unwrap().len();
        let lower = table.get(LOWER_LIP).unwrap().len();
        assert_eq!(lips.len(), upper + lower);
        // Index 308 appears in both lips and must stay duplicated
        assert_eq!(lips.iter().filter(|&&i| i == 308).count(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let json = serde_json::to_string(&RegionTable::default()).unwrap();
        let table = RegionTable::from_json_str(&json).unwrap();
        assert_eq!(table.get(FOREHEAD).unwrap().len(), 8);
    }

    #[test]
    fn test_missing_lips_rejected() {
        let json = r#"{"regions":{"left_cheek":[1,2,3]}}"#;
        assert!(RegionTable::from_json_str(json).is_err());
    }
}
