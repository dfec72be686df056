//! Equal-width binning with density normalization.

use crate::stats::min_max;

/// Histogram over `[min, max]` split into equal-width bins.
///
/// Every bin is half-open except the last, which also holds `max`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub counts: Vec<usize>,
    /// Number of values binned
    pub total: usize,
}

impl Histogram {
    pub fn new(data: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let Some((mut min, mut max)) = min_max(data) else {
            return Self {
                min: 0.0,
                max: 1.0,
                counts: vec![0; bins],
                total: 0,
            };
        };

        // All values equal: widen to a unit range centred on the value
        if min == max {
            min -= 0.5;
            max += 0.5;
        }

        let bin_width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &value in data {
            let bin = ((value - min) / bin_width).floor() as usize;
            counts[bin.min(bins - 1)] += 1;
        }

        Self {
            min,
            max,
            counts,
            total: data.len(),
        }
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.bins() as f64
    }

    /// Bin index holding `x`, `None` outside `[min, max]`
    pub fn bin_of(&self, x: f64) -> Option<usize> {
        if !(self.min..=self.max).contains(&x) {
            return None;
        }
        let bin = ((x - self.min) / self.bin_width()).floor() as usize;
        Some(bin.min(self.bins() - 1))
    }

    /// Counts scaled so the histogram area is 1
    pub fn densities(&self) -> Vec<f64> {
        if self.total == 0 {
            return vec![0.0; self.bins()];
        }
        let scale = self.total as f64 * self.bin_width();
        self.counts.iter().map(|&c| c as f64 / scale).collect()
    }

    pub fn max_density(&self) -> f64 {
        self.densities().into_iter().fold(0.0_f64, f64::max)
    }
}
