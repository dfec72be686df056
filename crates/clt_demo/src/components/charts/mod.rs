//! Chart components for data visualization.

mod histogram;

pub use histogram::{render_histogram, render_histogram_with_curve};
