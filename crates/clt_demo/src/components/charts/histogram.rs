//! Density histogram rendering with an optional fitted-curve overlay.
//!
//! Bars are drawn one terminal column at a time with eighth-block characters,
//! so a histogram with any bin count fills whatever width it is given.

use clt_demo_core::Histogram;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::util::format::format_axis;
use crate::util::styles::{CURVE_COLOR, HELP_COLOR};

/// Block characters for sub-character precision (from empty to full)
const BIN_CHARS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Marker for the dashed curve overlay
const CURVE_MARK: &str = "•";

/// Render a density histogram.
pub fn render_histogram(
    frame: &mut Frame,
    area: Rect,
    hist: &Histogram,
    color: Color,
    x_label: &str,
) {
    render_with_overlay(frame, area, hist, color, x_label, None);
}

/// Render a density histogram with a dashed curve in the same density units.
pub fn render_histogram_with_curve(
    frame: &mut Frame,
    area: Rect,
    hist: &Histogram,
    color: Color,
    x_label: &str,
    curve: &[(f64, f64)],
) {
    render_with_overlay(frame, area, hist, color, x_label, Some(curve));
}

fn render_with_overlay(
    frame: &mut Frame,
    area: Rect,
    hist: &Histogram,
    color: Color,
    x_label: &str,
    curve: Option<&[(f64, f64)]>,
) {
    let width = area.width as usize;
    // Last row holds the x-axis labels
    let height = area.height.saturating_sub(1) as usize;

    if height < 3 || width < 20 {
        let msg = Paragraph::new("Area too small").style(Style::default().fg(HELP_COLOR));
        frame.render_widget(msg, area);
        return;
    }

    if hist.total == 0 {
        let msg = Paragraph::new("No data").style(Style::default().fg(HELP_COLOR));
        frame.render_widget(msg, area);
        return;
    }

    let bar_density = column_densities(hist, width);
    let curve_density: Option<Vec<f64>> = curve.map(|points| {
        (0..width)
            .map(|col| interpolate(points, column_x(hist, width, col)))
            .collect()
    });

    let max_density = curve_density
        .iter()
        .flatten()
        .cloned()
        .fold(hist.max_density(), f64::max);
    if max_density <= 0.0 || !max_density.is_finite() {
        let msg = Paragraph::new("No data in bins").style(Style::default().fg(HELP_COLOR));
        frame.render_widget(msg, area);
        return;
    }

    let height_units = height * 8;
    let bar_heights = scale_to_units(&bar_density, max_density, height_units);
    let curve_heights = curve_density.map(|d| scale_to_units(&d, max_density, height_units));

    for row in 0..height {
        let row_base = (height - 1 - row) * 8;
        let row_top = row_base + 8;
        let mut spans = Vec::with_capacity(width);

        for (col, &bar_h) in bar_heights.iter().enumerate() {
            let char_to_use = if bar_h >= row_top {
                "█"
            } else if bar_h > row_base {
                BIN_CHARS[(bar_h - row_base).min(8)]
            } else {
                " "
            };

            let on_curve = curve_heights.as_ref().is_some_and(|heights| {
                let curve_h = heights[col];
                col % 2 == 0 && curve_h > row_base && curve_h <= row_top
            });

            let span = if on_curve {
                let mut style = Style::default().fg(CURVE_COLOR);
                if bar_h >= row_top {
                    style = style.bg(color);
                }
                Span::styled(CURVE_MARK, style)
            } else {
                Span::styled(char_to_use, Style::default().fg(color))
            };
            spans.push(span);
        }

        let row_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }

    let label_y = area.y + height as u16;
    let label_area = Rect::new(area.x, label_y, area.width, 1);
    frame.render_widget(
        Paragraph::new(axis_labels(hist.min, hist.max, x_label, width)),
        label_area,
    );
}

/// X value at the centre of terminal column `col`
fn column_x(hist: &Histogram, width: usize, col: usize) -> f64 {
    hist.min + (col as f64 + 0.5) * (hist.max - hist.min) / width as f64
}

/// Density of the bin under each terminal column
fn column_densities(hist: &Histogram, width: usize) -> Vec<f64> {
    let densities = hist.densities();
    (0..width)
        .map(|col| {
            hist.bin_of(column_x(hist, width, col))
                .map(|bin| densities[bin])
                .unwrap_or(0.0)
        })
        .collect()
}

/// Linear interpolation over curve points sorted by x; zero outside their range
fn interpolate(points: &[(f64, f64)], x: f64) -> f64 {
    points
        .windows(2)
        .find(|w| w[0].0 <= x && x <= w[1].0)
        .map(|w| {
            let (x0, y0) = w[0];
            let (x1, y1) = w[1];
            if x1 == x0 {
                y0
            } else {
                y0 + (y1 - y0) * (x - x0) / (x1 - x0)
            }
        })
        .unwrap_or(0.0)
}

/// Scale densities to eighth-row units
fn scale_to_units(values: &[f64], max: f64, height_units: usize) -> Vec<usize> {
    values
        .iter()
        .map(|&v| ((v / max) * height_units as f64).round() as usize)
        .collect()
}

fn axis_labels(min: f64, max: f64, x_label: &str, width: usize) -> Line<'static> {
    let left = format_axis(min);
    let right = format_axis(max);
    let used = left.len() + right.len() + x_label.chars().count();
    let gap = width.saturating_sub(used);

    Line::from(vec![
        Span::styled(left, Style::default().fg(HELP_COLOR)),
        Span::raw(" ".repeat(gap / 2)),
        Span::styled(x_label.to_string(), Style::default().fg(HELP_COLOR)),
        Span::raw(" ".repeat(gap - gap / 2)),
        Span::styled(right, Style::default().fg(HELP_COLOR)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_interpolate() {
        let points = [(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)];
        assert_eq!(interpolate(&points, 0.5), 1.0);
        assert_eq!(interpolate(&points, 1.5), 1.0);
        assert_eq!(interpolate(&points, 3.0), 0.0);
    }

    #[test]
    fn test_column_densities_stretch_bins() {
        let hist = Histogram::new(&[0.0, 0.0, 0.0, 1.0], 2);
        let densities = column_densities(&hist, 4);
        assert_eq!(densities, vec![1.5, 1.5, 0.5, 0.5]);
    }

    #[test]
    fn test_scale_to_units() {
        assert_eq!(scale_to_units(&[0.0, 0.5, 1.0], 1.0, 16), vec![0, 8, 16]);
    }

    #[test]
    fn test_axis_labels_fill_width() {
        let line = axis_labels(-1.0, 1.0, "Value", 30);
        assert_eq!(line.width(), 30);
    }

    #[test]
    fn test_render_histogram_draws_bars_and_labels() {
        let data: Vec<f64> = (0..200).map(|i| (i % 20) as f64).collect();
        let hist = Histogram::new(&data, 10);
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();

        terminal
            .draw(|frame| render_histogram(frame, frame.area(), &hist, Color::Blue, "Value"))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains('█'));
        assert!(text.contains("Value"));
        assert!(text.contains("0.00"));
        assert!(text.contains("19.0"));
        assert!(!text.contains(CURVE_MARK));
    }

    #[test]
    fn test_render_with_curve_draws_marks() {
        let data: Vec<f64> = (0..100).map(|i| i as f64 / 10.0).collect();
        let hist = Histogram::new(&data, 10);
        let curve: Vec<(f64, f64)> = (0..=10).map(|i| (i as f64 * 0.99, 0.2)).collect();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

        terminal
            .draw(|frame| {
                render_histogram_with_curve(
                    frame,
                    frame.area(),
                    &hist,
                    Color::Red,
                    "Sample Mean",
                    &curve,
                )
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains(CURVE_MARK));
        assert!(text.contains("Sample Mean"));
    }

    #[test]
    fn test_small_area_message() {
        let hist = Histogram::new(&[1.0, 2.0], 5);
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        terminal
            .draw(|frame| render_histogram(frame, frame.area(), &hist, Color::Blue, "Value"))
            .unwrap();
        assert!(buffer_text(&terminal).contains("Area"));
    }
}
