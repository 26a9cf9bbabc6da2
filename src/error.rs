use thiserror::Error;

// Main analysis error type

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to decode image: {0}")]
    DecodeFailure(#[from] image::ImageError),
    #[error("Invalid base64 image payload: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
    #[error("No face detected in the image")]
    NoFaceDetected,
    #[error("Landmark detection failed: {0}")]
    Detector(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Failed to load configuration: {0}")]
    ConfigSource(#[from] config::ConfigError),
    #[error("Failed to parse region table: {0}")]
    RegionTable(#[from] serde_json::Error),
}
