//! Descriptive statistics and the fitted normal curve.
//!
//! Variances here are population variances (denominator `n`), the same
//! convention the summary box reports.

use std::f64::consts::PI;

/// Arithmetic mean, `NaN` for empty input
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population variance (ddof = 0), `NaN` for empty input
pub fn variance(data: &[f64]) -> f64 {
    let mu = mean(data);
    data.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / data.len() as f64
}

/// Population standard deviation (ddof = 0)
pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Smallest and largest value, `None` for empty input
pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    if data.is_empty() {
        return None;
    }
    let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

/// Round to two decimals, the precision of every displayed statistic
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Normal density fitted to the sampling distribution by moments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalFit {
    pub mean: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
}

impl NormalFit {
    pub fn from_samples(data: &[f64]) -> Option<Self> {
        let (min, max) = min_max(data)?;
        // Summation error would otherwise leave a tiny positive variance
        let variance = if min == max { 0.0 } else { variance(data) };
        Some(Self {
            mean: mean(data),
            variance,
            min,
            max,
        })
    }

    /// Whether the density is finite everywhere
    pub fn is_degenerate(&self) -> bool {
        !(self.variance.is_finite() && self.variance > 0.0)
    }

    pub fn pdf(&self, x: f64) -> f64 {
        (-(x - self.mean).powi(2) / (2.0 * self.variance)).exp()
            / (2.0 * PI * self.variance).sqrt()
    }

    /// Density sampled on `points` evenly spaced x values from `min` to `max`.
    ///
    /// Returns `None` for zero or non-finite variance.
    pub fn curve(&self, points: usize) -> Option<Vec<(f64, f64)>> {
        if self.is_degenerate() || points < 2 {
            return None;
        }
        let step = (self.max - self.min) / (points - 1) as f64;
        Some(
            (0..points)
                .map(|i| {
                    let x = self.min + step * i as f64;
                    (x, self.pdf(x))
                })
                .collect(),
        )
    }
}

/// The four figures annotated on the sampling distribution panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Mean of the sample means
    pub sample_mean: f64,
    /// Standard deviation of the sample means
    pub sample_std: f64,
    pub population_mean: f64,
    pub population_std: f64,
}

impl Summary {
    pub fn compute(population: &[f64], sample_means: &[f64]) -> Self {
        Self {
            sample_mean: mean(sample_means),
            sample_std: std_dev(sample_means),
            population_mean: mean(population),
            population_std: std_dev(population),
        }
    }

    /// Standard error predicted by the CLT for samples of `sample_size`
    pub fn expected_standard_error(&self, sample_size: usize) -> f64 {
        self.population_std / (sample_size as f64).sqrt()
    }

    pub fn lines(&self) -> [String; 4] {
        [
            format!("Sample Mean: {:.2}", round2(self.sample_mean)),
            format!("Sample Std: {:.2}", round2(self.sample_std)),
            format!("Population Mean: {:.2}", round2(self.population_mean)),
            format!("Population Std: {:.2}", round2(self.population_std)),
        ]
    }
}
