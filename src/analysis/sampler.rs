use image::RgbImage;

use super::color::Rgb;
use super::landmarks::FaceLandmarks;

/// Collects pixel colors from fixed-size windows around landmark positions.
#[derive(Debug, Clone, Copy)]
pub struct RegionSampler {
    half_extent: u32,
}

impl RegionSampler {
    pub fn new(half_extent: u32) -> Self {
        Self { half_extent }
    }

    /// Flatten every pixel inside the clipped window around each requested
    /// landmark into one sample list. Indices outside the landmark set are
    /// skipped; overlapping windows keep their duplicates so densely covered
    /// areas weigh more in the dominant-color estimate.
    pub fn sample(
        &self,
        image: &RgbImage,
        landmarks: &FaceLandmarks,
        region_indices: &[usize],
    ) -> Vec<Rgb> {
        let (width, height) = image.dimensions();
        let extent = self.half_extent as i64;
        let mut samples = Vec::new();

        for &index in region_indices {
            let Some(point) = landmarks.get(index) else {
                continue;
            };
            let (px, py) = point.to_pixel(width, height);

            let x_start = (px - extent).clamp(0, width as i64);
            let x_end = (px + extent).clamp(0, width as i64);
            let y_start = (py - extent).clamp(0, height as i64);
            let y_end = (py + extent).clamp(0, height as i64);

            for y in y_start..y_end {
                for x in x_start..x_end {
                    samples.push(Rgb::from(*image.get_pixel(x as u32, y as u32)));
                }
            }
        }

        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::landmarks::NormalizedPoint;
    use image::ImageBuffer;

    fn uniform_image(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        ImageBuffer::from_pixel(width, height, image::Rgb(color))
    }

    #[test]
    fn test_interior_window_is_full_size() {
        let image = uniform_image(100, 100, [200, 150, 120]);
        let landmarks = FaceLandmarks::new(vec![NormalizedPoint::new(0.5, 0.5)]);
        let sampler = RegionSampler::new(10);

        let samples = sampler.sample(&image, &landmarks, &[0]);
        assert_eq!(samples.len(), 400); // 20x20 window
        assert!(samples.iter().all(|c| *c == Rgb::new(200, 150, 120)));
    }

    #[test]
    fn test_window_clipped_at_image_edge() {
        let image = uniform_image(100, 100, [10, 20, 30]);
        let landmarks = FaceLandmarks::new(vec![NormalizedPoint::new(0.0, 0.0)]);
        let sampler = RegionSampler::new(10);

        // Corner window loses the negative half in both axes
        let samples = sampler.sample(&image, &landmarks, &[0]);
        assert_eq!(samples.len(), 100);
    }

    #[test]
    fn test_one_by_one_image_extreme_corners() {
        let image = uniform_image(1, 1, [5, 6, 7]);
        let sampler = RegionSampler::new(10);

        for point in [NormalizedPoint::new(0.0, 0.0), NormalizedPoint::new(1.0, 1.0)] {
            let landmarks = FaceLandmarks::new(vec![point]);
            let samples = sampler.sample(&image, &landmarks, &[0]);
            assert_eq!(samples.len(), 1);
            assert_eq!(samples[0], Rgb::new(5, 6, 7));
        }
    }

    #[test]
    fn test_out_of_range_indices_skipped() {
        let image = uniform_image(50, 50, [1, 1, 1]);
        let landmarks = FaceLandmarks::new(vec![NormalizedPoint::new(0.5, 0.5)]);
        let sampler = RegionSampler::new(5);

        let samples = sampler.sample(&image, &landmarks, &[7, 400]);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_overlapping_windows_keep_duplicates() {
        let image = uniform_image(100, 100, [9, 9, 9]);
        let point = NormalizedPoint::new(0.5, 0.5);
        let landmarks = FaceLandmarks::new(vec![point, point]);
        let sampler = RegionSampler::new(10);

        let samples = sampler.sample(&image, &landmarks, &[0, 1]);
        assert_eq!(samples.len(), 800);
    }

    #[test]
    fn test_empty_indices_yield_empty_set() {
        let image = uniform_image(10, 10, [0, 0, 0]);
        let landmarks = FaceLandmarks::new(vec![NormalizedPoint::new(0.5, 0.5)]);
        let sampler = RegionSampler::new(10);

        assert!(sampler.sample(&image, &landmarks, &[]).is_empty());
    }
}
