use clt_demo_core::{DemoController, SliderId, SliderSpec};

use crate::keybindings::{KeyAction, Keybindings};

/// Mutable UI state shared by the components
pub struct AppState {
    pub controller: DemoController,
    /// Slider that receives step keys
    pub focus: SliderId,
    pub keybindings: Keybindings,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl AppState {
    pub fn new(controller: DemoController) -> Self {
        Self {
            controller,
            focus: SliderId::Mean,
            keybindings: Keybindings::default(),
            error_message: None,
            exit: false,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Apply a key action. Slider changes recompute synchronously before returning.
    pub fn apply(&mut self, action: KeyAction) {
        let focus = self.focus;
        let result = match action {
            KeyAction::Quit => {
                tracing::info!("Exit requested");
                self.exit = true;
                return;
            }
            KeyAction::FocusNext | KeyAction::FocusPrev => {
                // Two sliders: next and previous are the same slider
                self.focus = focus.next();
                return;
            }
            KeyAction::Step(steps) => self.controller.nudge(focus, steps),
            KeyAction::JumpToMin => self.controller.jump_to_min(focus),
            KeyAction::JumpToMax => self.controller.jump_to_max(focus),
        };

        match result {
            Ok(true) => {
                let sliders = self.controller.sliders();
                tracing::debug!(
                    slider = ?focus,
                    mean = sliders.mean,
                    std_dev = sliders.std_dev,
                    "Slider changed"
                );
                self.clear_error();
            }
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(slider = ?focus, error = %e, "Recompute failed");
                self.set_error(format!("Recompute failed: {e}"));
            }
        }
    }

    /// Fine steps making up one coarse step
    pub fn coarse_steps(&self) -> f64 {
        SliderSpec::COARSE_MULTIPLIER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clt_demo_core::DemoConfig;

    fn test_state() -> AppState {
        let config = DemoConfig {
            population_size: 1_000,
            num_samples: 100,
            ..Default::default()
        };
        AppState::new(DemoController::with_seed(config, 42).unwrap())
    }

    #[test]
    fn test_focus_cycles_between_sliders() {
        let mut state = test_state();
        state.apply(KeyAction::FocusNext);
        assert_eq!(state.focus, SliderId::StdDev);
        state.apply(KeyAction::FocusPrev);
        assert_eq!(state.focus, SliderId::Mean);
    }

    #[test]
    fn test_step_moves_focused_slider_only() {
        let mut state = test_state();
        state.apply(KeyAction::FocusNext);
        state.apply(KeyAction::Step(2.0));

        let sliders = state.controller.sliders();
        assert!((sliders.std_dev - 1.1).abs() < 1e-9);
        assert_eq!(sliders.mean, 0.0);
        assert_eq!(state.controller.snapshot().generation, 1);
    }

    #[test]
    fn test_jump_and_quit() {
        let mut state = test_state();
        state.apply(KeyAction::JumpToMax);
        assert_eq!(state.controller.sliders().mean, 5.0);
        assert!(!state.exit);
        state.apply(KeyAction::Quit);
        assert!(state.exit);
    }

    #[test]
    fn test_error_cleared_by_successful_change() {
        let mut state = test_state();
        state.set_error("stale".into());
        state.apply(KeyAction::Step(1.0));
        assert!(state.error_message.is_none());
    }
}
