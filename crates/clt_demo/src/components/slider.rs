use clt_demo_core::{SliderId, SliderSpec};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::keybindings::KeyAction;
use crate::state::AppState;
use crate::util::format::format_stat;
use crate::util::styles::{HELP_COLOR, MEAN_SLIDER_COLOR, STD_SLIDER_COLOR, focused_block};

const FILLED: &str = "━";
const EMPTY: &str = "─";
const KNOB: &str = "●";

/// The row of range inputs along the bottom of the screen
pub struct SliderPanel;

impl SliderPanel {
    pub fn new() -> Self {
        Self
    }

    fn render_slider(
        frame: &mut Frame,
        area: Rect,
        spec: &SliderSpec,
        value: f64,
        color: Color,
        focused: bool,
    ) {
        let block = focused_block(&format!(" {} ", spec.label), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let min_label = format_stat(spec.min);
        let max_label = format_stat(spec.max);
        let track_len = (inner.width as usize)
            .saturating_sub(min_label.len() + max_label.len() + 2)
            .max(3);

        let mut spans = vec![
            Span::styled(min_label, Style::default().fg(HELP_COLOR)),
            Span::raw(" "),
        ];
        spans.extend(track_spans(spec.fraction(value), track_len, color));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(max_label, Style::default().fg(HELP_COLOR)));

        let value_style = if focused {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        let lines = vec![
            Line::from(spans),
            Line::from(Span::styled(format_stat(value), value_style)).centered(),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for SliderPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Track of `len` cells with the knob placed at `fraction` of the way along
fn track_spans(fraction: f64, len: usize, color: Color) -> Vec<Span<'static>> {
    let knob = knob_position(fraction, len);
    vec![
        Span::styled(FILLED.repeat(knob), Style::default().fg(color)),
        Span::styled(KNOB, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(
            EMPTY.repeat(len.saturating_sub(knob + 1)),
            Style::default().fg(HELP_COLOR),
        ),
    ]
}

fn knob_position(fraction: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (fraction.clamp(0.0, 1.0) * (len - 1) as f64).round() as usize
}

impl Component for SliderPanel {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        match state.keybindings.resolve(key, state.coarse_steps()) {
            Some(KeyAction::Quit) => EventResult::Exit,
            Some(action) => {
                state.apply(action);
                EventResult::Handled
            }
            None => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let config = state.controller.config();
        let sliders = state.controller.sliders();
        for (id, chunk, color) in [
            (SliderId::Mean, chunks[0], MEAN_SLIDER_COLOR),
            (SliderId::StdDev, chunks[1], STD_SLIDER_COLOR),
        ] {
            Self::render_slider(
                frame,
                chunk,
                config.slider(id),
                sliders.get(id),
                color,
                state.focus == id,
            );
        }
    }
}
