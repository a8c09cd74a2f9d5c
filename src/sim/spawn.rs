//! Random fruit placement

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{FRUIT_MAX, FRUIT_MIN};

/// Source of fruit positions
pub trait PointSource {
    /// A point uniformly distributed in `[FRUIT_MIN, FRUIT_MAX)` on both axes
    fn random_point(&mut self) -> Vec2;
}

/// Seeded PCG point source (reproducible runs)
#[derive(Debug, Clone)]
pub struct SeededPoints {
    rng: Pcg32,
}

impl SeededPoints {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl PointSource for SeededPoints {
    fn random_point(&mut self) -> Vec2 {
        let x = self.rng.random_range(FRUIT_MIN..FRUIT_MAX);
        let y = self.rng.random_range(FRUIT_MIN..FRUIT_MAX);
        Vec2::new(x, y)
    }
}
