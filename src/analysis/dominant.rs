use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::color::Rgb;
use crate::config::ClusteringConfig;

/// Single-cluster dominant color estimation.
///
/// Runs a seeded k-means with one cluster over the sample set. With k=1 the
/// objective has a single global optimum (the per-channel mean), so every
/// restart converges to the same centroid; the restarts and the fixed seed
/// keep the procedure deterministic for byte-identical inputs. Channels are
/// truncated to integers and clamped to [0,255].
#[derive(Debug, Clone)]
pub struct DominantColorExtractor {
    seed: u64,
    restarts: usize,
    max_iterations: usize,
}

impl DominantColorExtractor {
    pub fn new(config: &ClusteringConfig) -> Self {
        Self {
            seed: config.seed,
            restarts: config.restarts.max(1),
            max_iterations: config.max_iterations.max(1),
        }
    }

    /// Extract the representative color of a sample set. An empty set maps
    /// to neutral gray, a defined fallback rather than an error.
    pub fn extract(&self, samples: &[Rgb]) -> Rgb {
        if samples.is_empty() {
            return Rgb::NEUTRAL_GRAY;
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut best_centroid = [0.0f64; 3];
        let mut best_inertia = f64::INFINITY;

        for _ in 0..self.restarts {
            let init = samples[rng.random_range(0..samples.len())];
            let mut centroid = [init.r as f64, init.g as f64, init.b as f64];

            for _ in 0..self.max_iterations {
                let next = Self::mean(samples);
                let moved = centroid
                    .iter()
                    .zip(next.iter())
                    .map(|(a, b)| (a - b).abs())
                    .fold(0.0f64, f64::max);
                centroid = next;
                if moved < 1e-9 {
                    break;
                }
            }

            let inertia = Self::inertia(samples, &centroid);
            if inertia < best_inertia {
                best_inertia = inertia;
                best_centroid = centroid;
            }
        }

        Rgb::new(
            Self::channel(best_centroid[0]),
            Self::channel(best_centroid[1]),
            Self::channel(best_centroid[2]),
        )
    }

    fn mean(samples: &[Rgb]) -> [f64; 3] {
        let mut sums = [0.0f64; 3];
        for sample in samples {
            sums[0] += sample.r as f64;
            sums[1] += sample.g as f64;
            sums[2] += sample.b as f64;
        }
        let count = samples.len() as f64;
        [sums[0] / count, sums[1] / count, sums[2] / count]
    }

    fn inertia(samples: &[Rgb], centroid: &[f64; 3]) -> f64 {
        samples
            .iter()
            .map(|s| {
                let dr = s.r as f64 - centroid[0];
                let dg = s.g as f64 - centroid[1];
                let db = s.b as f64 - centroid[2];
                dr * dr + dg * dg + db * db
            })
            .sum()
    }

    fn channel(value: f64) -> u8 {
        value.floor().clamp(0.0, 255.0) as u8
    }
}

impl Default for DominantColorExtractor {
    fn default() -> Self {
        Self::new(&ClusteringConfig::default())
    }
}
