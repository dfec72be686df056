//! Demo constants and slider ranges.

use crate::error::{CoreError, Result};

/// Which of the two sliders an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderId {
    Mean,
    StdDev,
}

impl SliderId {
    pub fn next(self) -> Self {
        match self {
            SliderId::Mean => SliderId::StdDev,
            SliderId::StdDev => SliderId::Mean,
        }
    }
}

/// Range and step of a single range input
#[derive(Debug, Clone, PartialEq)]
pub struct SliderSpec {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub initial: f64,
    /// Fine step; the coarse step is `COARSE_MULTIPLIER` fine steps
    pub step: f64,
}

impl SliderSpec {
    pub const COARSE_MULTIPLIER: f64 = 10.0;

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Fraction of the track covered by `value`, in `[0, 1]`
    pub fn fraction(&self, value: f64) -> f64 {
        ((self.clamp(value) - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    fn validate(&self) -> Result<()> {
        if !(self.min.is_finite() && self.max.is_finite()) || self.min >= self.max {
            return Err(CoreError::InvalidConfig(format!(
                "{}: min ({}) must be below max ({})",
                self.label, self.min, self.max
            )));
        }
        if !(self.min..=self.max).contains(&self.initial) {
            return Err(CoreError::InvalidConfig(format!(
                "{}: initial value {} outside [{}, {}]",
                self.label, self.initial, self.min, self.max
            )));
        }
        if self.step.is_nan() || self.step <= 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "{}: step must be positive",
                self.label
            )));
        }
        Ok(())
    }
}

/// Fixed sizes and ranges for one demo session
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub population_size: usize,
    pub sample_size: usize,
    pub num_samples: usize,
    pub population_bins: usize,
    pub sample_bins: usize,
    pub sampling_bins: usize,
    pub curve_points: usize,
    pub mean_slider: SliderSpec,
    pub std_slider: SliderSpec,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            population_size: 10_000,
            sample_size: 100,
            num_samples: 1_000,
            population_bins: 50,
            sample_bins: 20,
            sampling_bins: 50,
            curve_points: 100,
            mean_slider: SliderSpec {
                label: "Population Mean",
                min: -5.0,
                max: 5.0,
                initial: 0.0,
                step: 0.1,
            },
            std_slider: SliderSpec {
                label: "Population Std Dev",
                min: 0.1,
                max: 5.0,
                initial: 1.0,
                step: 0.05,
            },
        }
    }
}

impl DemoConfig {
    pub fn slider(&self, id: SliderId) -> &SliderSpec {
        match id {
            SliderId::Mean => &self.mean_slider,
            SliderId::StdDev => &self.std_slider,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("population_size", self.population_size),
            ("sample_size", self.sample_size),
            ("num_samples", self.num_samples),
            ("population_bins", self.population_bins),
            ("sample_bins", self.sample_bins),
            ("sampling_bins", self.sampling_bins),
        ];
        for (name, value) in sizes {
            if value == 0 {
                return Err(CoreError::InvalidConfig(format!("{name} must be > 0")));
            }
        }
        if self.curve_points < 2 {
            return Err(CoreError::InvalidConfig(
                "curve_points must be at least 2".into(),
            ));
        }

        self.mean_slider.validate()?;
        self.std_slider.validate()?;

        // Exp::new needs a strictly positive rate
        if self.std_slider.min <= 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "{}: minimum must be positive",
                self.std_slider.label
            )));
        }
        Ok(())
    }

    /// Panel title for the single-sample histogram
    pub fn sample_title(&self) -> String {
        format!("Random Sample (n={})", self.sample_size)
    }

    /// Panel title for the sampling distribution histogram
    pub fn sampling_title(&self) -> String {
        format!(
            "Sampling Distribution of Means ({} samples of size {})",
            self.num_samples, self.sample_size
        )
    }
}
