//! Terminal front-end for the Central Limit Theorem demonstration
//!
//! Draws the population, a single sample and the sampling distribution of the
//! mean as live histograms, with two sliders for the population mean and
//! standard deviation. All computation lives in `clt_demo_core`.

pub mod app;
pub mod components;
pub mod event;
pub mod keybindings;
pub mod logging;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
