use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::{ERROR_COLOR, HELP_COLOR};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP_TEXT: &str =
    "Tab/j/k: switch slider | ←/→ h/l: step | PgUp/PgDn H/L: big step | Home/End: min/max | q: quit";

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(ERROR_COLOR)),
                Span::raw(error.clone()),
            ])
        } else {
            Line::from(Span::styled(HELP_TEXT, Style::default().fg(HELP_COLOR)))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clt_demo_core::{DemoConfig, DemoController};
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 2)).unwrap();
        let mut bar = StatusBar::new();
        terminal
            .draw(|frame| bar.render(frame, frame.area(), state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn test_state() -> AppState {
        let config = DemoConfig {
            population_size: 500,
            sample_size: 10,
            num_samples: 50,
            ..Default::default()
        };
        AppState::new(DemoController::with_seed(config, 1).unwrap())
    }

    #[test]
    fn test_help_text_by_default() {
        let text = rendered_text(&test_state());
        assert!(text.contains("q: quit"));
        assert!(!text.contains("Error: "));
    }

    #[test]
    fn test_error_replaces_help_text() {
        let mut state = test_state();
        state.set_error("Recompute failed: bad std".into());
        let text = rendered_text(&state);
        assert!(text.contains("Error: Recompute failed: bad std"));
        assert!(!text.contains("q: quit"));

        state.clear_error();
        assert!(rendered_text(&state).contains("q: quit"));
    }
}
