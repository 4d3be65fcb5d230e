use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{BoundingBox, Coordinate};

/// Uniform random coordinates inside a [`BoundingBox`].
#[derive(Debug, Clone)]
pub struct CoordinateSampler {
    rng: StdRng,
    bounds: BoundingBox,
}

impl CoordinateSampler {
    pub fn new(bounds: BoundingBox) -> Self {
        Self { rng: StdRng::from_entropy(), bounds }
    }

    /// Reproducible sequence, for tests.
    pub fn seeded(bounds: BoundingBox, seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), bounds }
    }

    pub fn sample(&mut self) -> Coordinate {
        Coordinate {
            latitude: self.rng.gen_range(self.bounds.lat_min..=self.bounds.lat_max),
            longitude: self.rng.gen_range(self.bounds.lon_min..=self.bounds.lon_max),
        }
    }
}
