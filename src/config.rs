use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AnalysisError;

/// Configuration for the face analysis pipeline with tunable parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Half-extent of the square pixel window carved around each landmark
    pub sample_half_extent: u32,
    /// Constant confidence reported on every successful analysis
    pub placeholder_confidence: f32,
    pub detector: DetectorConfig,
    pub clustering: ClusteringConfig,
}

/// Knobs passed through to the landmark provider, not reinterpreted here
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub max_faces: usize,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

/// Parameters of the seeded single-cluster extraction
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    pub seed: u64,
    pub restarts: usize,
    pub max_iterations: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_half_extent: 10,
            placeholder_confidence: 0.95,
            detector: DetectorConfig::default(),
            clustering: ClusteringConfig::default(),
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_faces: 1,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            restarts: 10,
            max_iterations: 300,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a file, with FACETONE_* environment overrides
    pub fn load(path: &Path) -> Result<Self, AnalysisError> {
        let settings = Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("FACETONE").separator("__"))
            .build()?;
        let loaded: Self = settings.try_deserialize()?;
        loaded.validate().map_err(AnalysisError::Config)?;
        Ok(loaded)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_half_extent == 0 {
            return Err("Sample half-extent must be greater than 0".to_string());
        }

        if self.placeholder_confidence < 0.0 || self.placeholder_confidence > 1.0 {
            return Err("Placeholder confidence must be between 0.0 and 1.0".to_string());
        }

        if self.detector.max_faces == 0 {
            return Err("At least one face must be requested from the detector".to_string());
        }

        if self.detector.min_detection_confidence < 0.0
            || self.detector.min_detection_confidence > 1.0
        {
            return Err("Detection confidence must be between 0.0 and 1.0".to_string());
        }

        if self.detector.min_tracking_confidence < 0.0
            || self.detector.min_tracking_confidence > 1.0
        {
            return Err("Tracking confidence must be between 0.0 and 1.0".to_string());
        }

        if self.clustering.restarts == 0 {
            return Err("Clustering needs at least one restart".to_string());
        }

        if self.clustering.max_iterations == 0 {
            return Err("Clustering needs at least one iteration".to_string());
        }

        Ok(())
    }

    /// Set the pixel window half-extent
    pub fn with_sample_half_extent(mut self, half_extent: u32) -> Self {
        self.sample_half_extent = half_extent;
        self
    }

    /// Set the clustering seed
    pub fn with_clustering_seed(mut self, seed: u64) -> Self {
        self.clustering.seed = seed;
        self
    }

    /// Set the detector confidence thresholds
    pub fn with_detector_confidence(mut self, detection: f32, tracking: f32) -> Self {
        self.detector.min_detection_confidence = detection.clamp(0.0, 1.0);
        self.detector.min_tracking_confidence = tracking.clamp(0.0, 1.0);
        self
    }
}
