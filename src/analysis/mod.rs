pub mod analyzer;
pub mod classifier;
pub mod color;
pub mod dominant;
pub mod landmarks;
pub mod regions;
pub mod sampler;

pub use analyzer::{AnalysisResult, FaceAnalyzer};
pub use classifier::{SkinTone, Undertone};
pub use color::Rgb;
pub use dominant::DominantColorExtractor;
pub use landmarks::{FaceLandmarks, LandmarkDetector, NormalizedPoint};
pub use regions::RegionTable;
pub use sampler::RegionSampler;
