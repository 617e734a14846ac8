//! Seeded synthetic point clouds.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

/// Half-width of the cube points are drawn from.
const EXTENT: f64 = 100.0;

/// Configuration for a uniform point cloud.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Coordinates per point.
    pub dimensions: usize,
    /// Seed for the generator.
    pub seed: u64,
}

/// Errors raised by synthetic generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// No points were requested.
    #[error("point count must be positive")]
    ZeroPoints,
    /// Points without coordinates were requested.
    #[error("dimensions must be positive")]
    ZeroDimensions,
}

/// Draws points uniformly from the cube `[-100, 100)^d`.
///
/// The same configuration always yields the same points.
///
/// # Errors
/// Returns [`SyntheticError`] when the point count or dimension is zero.
pub fn uniform_points(config: &SyntheticConfig) -> Result<Vec<Vec<f64>>, SyntheticError> {
    if config.point_count == 0 {
        return Err(SyntheticError::ZeroPoints);
    }
    if config.dimensions == 0 {
        return Err(SyntheticError::ZeroDimensions);
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    Ok((0..config.point_count)
        .map(|_| {
            (0..config.dimensions)
                .map(|_| rng.gen_range(-EXTENT..EXTENT))
                .collect()
        })
        .collect())
}
