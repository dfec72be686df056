//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for the focused slider
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text and axis labels
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Bars of the population histogram
pub const POPULATION_COLOR: Color = Color::Blue;

/// Bars of the single-sample histogram
pub const SAMPLE_COLOR: Color = Color::Green;

/// Bars of the sampling distribution histogram
pub const SAMPLING_COLOR: Color = Color::Red;

/// Fitted normal curve drawn over the sampling distribution
pub const CURVE_COLOR: Color = Color::White;

/// Error text in the status bar
pub const ERROR_COLOR: Color = Color::Red;

/// Track fill colors of the two sliders
pub const MEAN_SLIDER_COLOR: Color = Color::LightBlue;
pub const STD_SLIDER_COLOR: Color = Color::LightGreen;

/// Create a block with a title that shows focused state via border color.
///
/// When focused, the border is yellow. When unfocused, it's the default color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Create a panel block with a title and a bottom axis caption
pub fn panel_block(title: &str, caption: &str) -> Block<'static> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title.to_string()).fg(HEADER_COLOR));

    if !caption.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", caption)).fg(HELP_COLOR));
    }

    block
}
