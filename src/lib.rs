pub mod analysis;
pub mod config;
pub mod error;
pub mod recommend;
pub mod service;

pub use analysis::{
    AnalysisResult, DominantColorExtractor, FaceAnalyzer, FaceLandmarks, LandmarkDetector,
    NormalizedPoint, RegionSampler, RegionTable, Rgb, SkinTone, Undertone,
};
pub use config::{AnalyzerConfig, ClusteringConfig, DetectorConfig};
pub use error::AnalysisError;
pub use recommend::{
    Budget, Occasion, RecommendationEngine, RecommendationRequest, Recommendations,
};
pub use service::{AnalysisRequest, AnalysisService, ImagePayload};
