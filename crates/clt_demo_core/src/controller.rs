//! The demo controller: slider state plus the recompute cycle.
//!
//! Every slider change regenerates the population, the single sample and the
//! sampling distribution together and swaps in a fresh [`Snapshot`]. Readers
//! never observe a mix of old and new data.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::{DemoConfig, SliderId, SliderSpec};
use crate::error::Result;
use crate::histogram::Histogram;
use crate::population::generate_population;
use crate::sampling::{draw_sample, sampling_distribution};
use crate::stats::{NormalFit, Summary};

/// Why a recompute was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateTrigger {
    Startup,
    MeanChanged,
    StdChanged,
}

impl From<SliderId> for UpdateTrigger {
    fn from(id: SliderId) -> Self {
        match id {
            SliderId::Mean => UpdateTrigger::MeanChanged,
            SliderId::StdDev => UpdateTrigger::StdChanged,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing the last computed snapshot
    Idle,
    Recomputing,
}

/// Current values of the two range inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    pub mean: f64,
    pub std_dev: f64,
}

impl SliderState {
    pub fn get(&self, id: SliderId) -> f64 {
        match id {
            SliderId::Mean => self.mean,
            SliderId::StdDev => self.std_dev,
        }
    }

    fn set(&mut self, id: SliderId, value: f64) {
        match id {
            SliderId::Mean => self.mean = value,
            SliderId::StdDev => self.std_dev = value,
        }
    }
}

/// Everything derived from one set of slider values
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Slider values this snapshot was computed from
    pub sliders: SliderState,
    pub population: Vec<f64>,
    pub sample: Vec<f64>,
    pub sample_means: Vec<f64>,
    pub population_hist: Histogram,
    pub sample_hist: Histogram,
    pub sampling_hist: Histogram,
    pub fit: Option<NormalFit>,
    /// `None` when the sampling distribution has zero variance
    pub curve: Option<Vec<(f64, f64)>>,
    pub summary: Summary,
    /// Incremented on every recompute; the UI redraws when it changes
    pub generation: u64,
}

impl Snapshot {
    fn compute(
        config: &DemoConfig,
        sliders: SliderState,
        generation: u64,
        rng: &mut SmallRng,
    ) -> Result<Self> {
        let population = generate_population(
            sliders.mean,
            sliders.std_dev,
            config.population_size,
            rng,
        )?;
        let sample = draw_sample(&population, config.sample_size, rng);
        let sample_means =
            sampling_distribution(&population, config.sample_size, config.num_samples, rng);

        let fit = NormalFit::from_samples(&sample_means);
        let curve = fit.and_then(|f| f.curve(config.curve_points));
        let summary = Summary::compute(&population, &sample_means);

        Ok(Self {
            sliders,
            population_hist: Histogram::new(&population, config.population_bins),
            sample_hist: Histogram::new(&sample, config.sample_bins),
            sampling_hist: Histogram::new(&sample_means, config.sampling_bins),
            population,
            sample,
            sample_means,
            fit,
            curve,
            summary,
            generation,
        })
    }
}

pub struct DemoController {
    config: DemoConfig,
    sliders: SliderState,
    phase: Phase,
    rng: SmallRng,
    snapshot: Snapshot,
}

impl DemoController {
    /// Create a controller seeded from OS entropy and run the startup update
    pub fn new(config: DemoConfig) -> Result<Self> {
        Self::from_rng(config, SmallRng::from_os_rng())
    }

    /// Create a controller with a reproducible random stream
    pub fn with_seed(config: DemoConfig, seed: u64) -> Result<Self> {
        Self::from_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(config: DemoConfig, mut rng: SmallRng) -> Result<Self> {
        config.validate()?;

        let sliders = SliderState {
            mean: config.mean_slider.initial,
            std_dev: config.std_slider.initial,
        };
        let snapshot = Snapshot::compute(&config, sliders, 0, &mut rng)?;
        tracing::debug!(
            trigger = ?UpdateTrigger::Startup,
            mean = sliders.mean,
            std_dev = sliders.std_dev,
            "Initial snapshot computed"
        );

        Ok(Self {
            config,
            sliders,
            phase: Phase::Idle,
            rng,
            snapshot,
        })
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn sliders(&self) -> SliderState {
        self.sliders
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Regenerate all derived data from the current slider values.
    ///
    /// On error the previous snapshot is kept.
    pub fn update(&mut self, trigger: UpdateTrigger) -> Result<&Snapshot> {
        self.phase = Phase::Recomputing;
        let generation = self.snapshot.generation + 1;
        let result = Snapshot::compute(&self.config, self.sliders, generation, &mut self.rng);
        self.phase = Phase::Idle;

        self.snapshot = result?;
        tracing::debug!(
            trigger = ?trigger,
            generation,
            mean = self.sliders.mean,
            std_dev = self.sliders.std_dev,
            "Snapshot recomputed"
        );
        Ok(&self.snapshot)
    }

    /// Set a slider, recomputing if its value actually changed.
    ///
    /// Returns whether a recompute happened. If the recompute fails the slider
    /// is restored to its previous value.
    pub fn set_value(&mut self, id: SliderId, value: f64) -> Result<bool> {
        let spec = self.config.slider(id);
        let clamped = spec.clamp(value);
        let previous = self.sliders.get(id);
        if clamped == previous {
            return Ok(false);
        }

        self.sliders.set(id, clamped);
        if let Err(e) = self.update(id.into()) {
            self.sliders.set(id, previous);
            return Err(e);
        }
        Ok(true)
    }

    pub fn set_mean(&mut self, value: f64) -> Result<bool> {
        self.set_value(SliderId::Mean, value)
    }

    pub fn set_std(&mut self, value: f64) -> Result<bool> {
        self.set_value(SliderId::StdDev, value)
    }

    /// Move a slider by `steps` fine steps, snapped to the step grid
    pub fn nudge(&mut self, id: SliderId, steps: f64) -> Result<bool> {
        let spec = self.config.slider(id);
        let target = snap_to_step(spec, self.sliders.get(id) + steps * spec.step);
        self.set_value(id, target)
    }

    pub fn jump_to_min(&mut self, id: SliderId) -> Result<bool> {
        let min = self.config.slider(id).min;
        self.set_value(id, min)
    }

    pub fn jump_to_max(&mut self, id: SliderId) -> Result<bool> {
        let max = self.config.slider(id).max;
        self.set_value(id, max)
    }
}

fn snap_to_step(spec: &SliderSpec, value: f64) -> f64 {
    let steps = ((value - spec.min) / spec.step).round();
    spec.clamp(spec.min + steps * spec.step)
}
