//! Resampling from the population.

use rand::Rng;

use crate::stats::mean;

/// Draw `size` values uniformly with replacement.
///
/// An empty population yields an empty sample.
pub fn draw_sample<R: Rng + ?Sized>(population: &[f64], size: usize, rng: &mut R) -> Vec<f64> {
    if population.is_empty() {
        return Vec::new();
    }
    (0..size)
        .map(|_| population[rng.random_range(0..population.len())])
        .collect()
}

/// Means of `count` independent samples of `sample_size` values each
pub fn sampling_distribution<R: Rng + ?Sized>(
    population: &[f64],
    sample_size: usize,
    count: usize,
    rng: &mut R,
) -> Vec<f64> {
    (0..count)
        .map(|_| mean(&draw_sample(population, sample_size, rng)))
        .collect()
}
