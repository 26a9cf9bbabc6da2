use std::sync::Arc;
use std::time::Instant;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::classifier::{SkinTone, Undertone};
use super::color::Rgb;
use super::dominant::DominantColorExtractor;
use super::landmarks::LandmarkDetector;
use super::regions::RegionTable;
use super::sampler::RegionSampler;
use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;

/// Immutable result record of one analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub skin_tone: SkinTone,
    pub undertone: Undertone,
    pub skin_tone_rgb: Rgb,
    pub lip_color: Rgb,
    pub face_detected: bool,
    pub confidence: f32,
}

/// Drives the full analysis: decode, landmark detection, region sampling,
/// dominant-color extraction, and tone classification.
///
/// The landmark model is injected behind [`LandmarkDetector`]; the detector
/// knobs in [`crate::config::DetectorConfig`] are handed to that backend at
/// construction by the embedder, not reinterpreted here. Every call is
/// stateless and independent; nothing is cached across requests.
pub struct FaceAnalyzer {
    detector: Arc<dyn LandmarkDetector>,
    regions: RegionTable,
    sampler: RegionSampler,
    extractor: DominantColorExtractor,
    confidence: f32,
}

impl FaceAnalyzer {
    pub fn new(
        detector: Arc<dyn LandmarkDetector>,
        config: AnalyzerConfig,
    ) -> Result<Self, AnalysisError> {
        config.validate().map_err(AnalysisError::Config)?;

        Ok(Self {
            detector,
            regions: RegionTable::default(),
            sampler: RegionSampler::new(config.sample_half_extent),
            extractor: DominantColorExtractor::new(&config.clustering),
            confidence: config.placeholder_confidence,
        })
    }

    /// Replace the built-in Face Mesh region table
    pub fn with_region_table(mut self, regions: RegionTable) -> Result<Self, AnalysisError> {
        regions.validate().map_err(AnalysisError::Config)?;
        self.regions = regions;
        Ok(self)
    }

    /// Analyze raw image bytes in any encoding the image crate can decode.
    ///
    /// Fails with [`AnalysisError::NoFaceDetected`] when the landmark
    /// provider returns zero faces; only the first face is used when more
    /// are present.
    pub fn analyze(&self, image_bytes: &[u8]) -> Result<AnalysisResult, AnalysisError> {
        let analysis_start = Instant::now();

        let decoded = image::load_from_memory(image_bytes)?;
        // Landmark backends consume RGB channel order
        let rgb = decoded.to_rgb8();

        let faces = self.detector.detect(&rgb)?;
        let Some(landmarks) = faces.first() else {
            debug!("{} returned no faces", self.detector.name());
            return Err(AnalysisError::NoFaceDetected);
        };

        let mut skin_samples = Vec::new();
        for (name, indices) in self.regions.skin_regions() {
            let samples = self.sampler.sample(&rgb, landmarks, indices);
            if samples.is_empty() {
                // Landmark/region-table mismatch; the gray fallback absorbs it
                warn!("Region {} produced no samples", name);
            }
            skin_samples.extend(samples);
        }

        let lip_indices = self.regions.lip_indices();
        let lip_samples = self.sampler.sample(&rgb, landmarks, &lip_indices);
        if lip_samples.is_empty() {
            warn!("Lip regions produced no samples");
        }

        // Two independent single-cluster extractions, not a joint clustering
        let skin_tone_rgb = self.extractor.extract(&skin_samples);
        let lip_color = self.extractor.extract(&lip_samples);

        let skin_tone = SkinTone::from_color(skin_tone_rgb);
        let undertone = Undertone::from_color(skin_tone_rgb);

        info!(
            "Face analysis completed in {}us: {:?} skin tone with {:?} undertone",
            analysis_start.elapsed().as_micros(),
            skin_tone,
            undertone
        );

        Ok(AnalysisResult {
            skin_tone,
            undertone,
            skin_tone_rgb,
            lip_color,
            face_detected: true,
            confidence: self.confidence,
        })
    }

    /// Analyze a base64 payload, stripping an optional `data:<mime>;base64,`
    /// prefix first.
    pub fn analyze_data_url(&self, data: &str) -> Result<AnalysisResult, AnalysisError> {
        let encoded = match data.split_once(',') {
            Some((_, rest)) => rest,
            None => data,
        };
        let bytes = BASE64.decode(encoded.trim())?;
        self.analyze(&bytes)
    }
}
