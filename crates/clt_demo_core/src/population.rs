//! Synthetic mixed-distribution population.

use rand::{Rng, distr::Distribution};

use crate::error::{CoreError, Result};

/// Build a population of exactly `size` values.
///
/// The first `size / 2` values come from `Normal(mean, std_dev)`. The rest come
/// from an exponential with scale `std_dev` (rate `1 / std_dev`) shifted by
/// `mean`, which gives the population a right skew.
pub fn generate_population<R: Rng + ?Sized>(
    mean: f64,
    std_dev: f64,
    size: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let normal = rand_distr::Normal::new(mean, std_dev).map_err(|e| {
        CoreError::InvalidParameters {
            distribution: "normal",
            mean,
            std_dev,
            reason: e.to_string(),
        }
    })?;
    let exponential =
        rand_distr::Exp::new(1.0 / std_dev).map_err(|e| CoreError::InvalidParameters {
            distribution: "exponential",
            mean,
            std_dev,
            reason: e.to_string(),
        })?;

    let normal_half = size / 2;
    let mut population = Vec::with_capacity(size);
    population.extend((0..normal_half).map(|_| normal.sample(rng)));
    population.extend((normal_half..size).map(|_| mean + exponential.sample(rng)));

    Ok(population)
}
