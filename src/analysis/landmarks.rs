use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// A facial keypoint in normalized [0,1] image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert to pixel coordinates by scaling against the image size,
    /// truncating toward negative infinity
    pub fn to_pixel(&self, width: u32, height: u32) -> (i64, i64) {
        let px = (self.x * width as f32).floor() as i64;
        let py = (self.y * height as f32).floor() as i64;
        (px, py)
    }
}

/// Ordered landmark set for one detected face, indexed positionally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceLandmarks {
    points: Vec<NormalizedPoint>,
}

impl FaceLandmarks {
    pub fn new(points: Vec<NormalizedPoint>) -> Self {
        Self { points }
    }

    pub fn get(&self, index: usize) -> Option<&NormalizedPoint> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Boundary to the external landmark model.
///
/// Implementations wrap a pretrained face-mesh runtime; the analysis core
/// never locates keypoints itself. Implementations must be safe for
/// concurrent inference or serialize calls internally.
pub trait LandmarkDetector: Send + Sync {
    /// Detect faces in an RGB image. Zero results means no face was found;
    /// the orchestrator uses only the first entry.
    fn detect(&self, image: &RgbImage) -> Result<Vec<FaceLandmarks>, AnalysisError>;

    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixel_truncates() {
        let point = NormalizedPoint::new(0.5, 0.99);
        assert_eq!(point.to_pixel(100, 100), (50, 99));
    }

    #[test]
    fn test_to_pixel_extreme_corners() {
        assert_eq!(NormalizedPoint::new(0.0, 0.0).to_pixel(1, 1), (0, 0));
        assert_eq!(NormalizedPoint::new(1.0, 1.0).to_pixel(1, 1), (1, 1));
    }

    #[test]
    fn test_out_of_range_index() {
        let landmarks = FaceLandmarks::new(vec![NormalizedPoint::new(0.5, 0.5)]);
        assert!(landmarks.get(0).is_some());
        assert!(landmarks.get(1).is_none());
    }
}
