//! Central Limit Theorem demonstration engine
//!
//! This crate owns everything the demo computes, independent of how it is drawn:
//! - A skewed synthetic population (half normal, half shifted exponential)
//! - Uniform resampling with replacement and the sampling distribution of the mean
//! - Density histograms and a normal curve fitted to the sample means
//! - The `DemoController` that keeps all of it consistent with two slider values
//!
//! ```ignore
//! use clt_demo_core::{DemoConfig, DemoController, SliderId};
//!
//! let mut controller = DemoController::with_seed(DemoConfig::default(), 42)?;
//! controller.nudge(SliderId::StdDev, 10.0)?;
//! println!("{:?}", controller.snapshot().summary.lines());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod controller;
pub mod histogram;
pub mod population;
pub mod sampling;
pub mod stats;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod error;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{DemoConfig, SliderId, SliderSpec};
pub use controller::{DemoController, Phase, SliderState, Snapshot, UpdateTrigger};
pub use error::CoreError;
pub use histogram::Histogram;
pub use stats::{NormalFit, Summary};
