//! The three-panel view: population, one sample, and the sampling distribution.

use clt_demo_core::{Snapshot, Summary};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::components::charts::{render_histogram, render_histogram_with_curve};
use crate::components::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::format::format_stat;
use crate::util::styles::{
    HEADER_COLOR, POPULATION_COLOR, SAMPLE_COLOR, SAMPLING_COLOR, panel_block,
};

pub struct DemoScreen;

impl DemoScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_sampling_panel(frame: &mut Frame, area: Rect, state: &AppState, snapshot: &Snapshot) {
        let config = state.controller.config();
        let caption = if snapshot.curve.is_some() {
            "x: Sample Mean  y: Frequency  █ Sample Means  • Normal Distribution"
        } else {
            "x: Sample Mean  y: Frequency  █ Sample Means"
        };
        let block = panel_block(&config.sampling_title(), caption);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match &snapshot.curve {
            Some(curve) => render_histogram_with_curve(
                frame,
                inner,
                &snapshot.sampling_hist,
                SAMPLING_COLOR,
                "Sample Mean",
                curve,
            ),
            None => render_histogram(
                frame,
                inner,
                &snapshot.sampling_hist,
                SAMPLING_COLOR,
                "Sample Mean",
            ),
        }

        render_summary_box(frame, inner, &summary_lines(&snapshot.summary, config.sample_size));
    }
}

impl Default for DemoScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// The four rounded statistics plus the CLT-predicted standard error
fn summary_lines(summary: &Summary, sample_size: usize) -> Vec<String> {
    let mut lines = summary.lines().to_vec();
    lines.push(format!(
        "Std Error (σ/√n): {}",
        format_stat(summary.expected_standard_error(sample_size))
    ));
    lines
}

/// Boxed text pinned to the top-left corner of `area`
fn render_summary_box(frame: &mut Frame, area: Rect, lines: &[String]) {
    let text_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let width = (text_width + 4).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    if width < 6 || height < 3 {
        return;
    }

    let box_area = Rect::new(area.x + 1, area.y, width.min(area.width - 1), height);
    let text: Vec<Line> = lines.iter().map(|l| Line::from(format!(" {l}"))).collect();

    frame.render_widget(Clear, box_area);
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(HEADER_COLOR)),
        ),
        box_area,
    );
}

impl Component for DemoScreen {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let snapshot = state.controller.snapshot();
        let config = state.controller.config();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let block = panel_block(
            "Population Distribution",
            "x: Value  y: Frequency  █ Population",
        );
        let inner = block.inner(top[0]);
        frame.render_widget(block, top[0]);
        render_histogram(frame, inner, &snapshot.population_hist, POPULATION_COLOR, "Value");

        let block = panel_block(&config.sample_title(), "x: Value  y: Frequency  █ Sample");
        let inner = block.inner(top[1]);
        frame.render_widget(block, top[1]);
        render_histogram(frame, inner, &snapshot.sample_hist, SAMPLE_COLOR, "Value");

        Self::render_sampling_panel(frame, rows[1], state, snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clt_demo_core::{DemoConfig, DemoController};
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered_text(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut screen = DemoScreen::new();
        terminal
            .draw(|frame| screen.render(frame, frame.area(), state))
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
        AppState::new(DemoController::with_seed(DemoConfig::default(), 42).unwrap())
    }

    #[test]
    fn test_panels_and_summary_rendered() {
        let state = test_state();
        let text = rendered_text(&state, 160, 48);

        assert!(text.contains("Population Distribution"));
        assert!(text.contains("Random Sample (n=100)"));
        assert!(text.contains("Sampling Distribution of Means (1000 samples of size 100)"));
        assert!(text.contains("█ Population"));
        assert!(text.contains("█ Sample"));
        assert!(text.contains("█ Sample Means"));

        for line in state.controller.snapshot().summary.lines() {
            assert!(text.contains(&line), "missing summary line {line}");
        }
        assert!(text.contains("Std Error"));
    }

    #[test]
    fn test_summary_tracks_slider_change() {
        let mut state = test_state();
        state.controller.set_mean(-4.0).unwrap();
        let text = rendered_text(&state, 160, 48);

        let expected = &state.controller.snapshot().summary.lines()[2];
        assert!(expected.starts_with("Population Mean: -"));
        assert!(text.contains(expected.as_str()));
    }

    #[test]
    fn test_summary_lines_include_standard_error() {
        let summary = Summary {
            sample_mean: 0.5,
            sample_std: 0.11,
            population_mean: 0.5,
            population_std: 1.1,
        };
        let lines = summary_lines(&summary, 100);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "Std Error (σ/√n): 0.11");
    }
}
